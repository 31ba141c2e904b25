//! GPT-style pretokenization: split raw text into contraction-aware,
//! whitespace-aware pieces before each piece becomes its own leaf-graph.
//!
//! The pattern is the literal GPT-oss-20b split regex carried over from
//! `graphs/words.py` in the original implementation. It needs lookahead
//! (`(?!\S)`), which the `regex` crate does not support, hence `fancy-regex`.
use fancy_regex::Regex;
use std::sync::LazyLock;

use crate::error::PretokenizeError;

/// Named, reusable split patterns.
pub mod patterns {
    /// The GPT-oss-20b pretokenizer pattern: splits on contractions, letter
    /// runs, digit runs (capped at 3), and whitespace, with a negative
    /// lookahead so trailing whitespace followed by non-space is not
    /// swallowed into the next piece.
    pub const GPT_OSS: &str = r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?|[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?|\p{N}{1,3}| ?[^\s\p{L}\p{N}]+[\r\n/]*|\s*[\r\n]+|\s+(?!\S)|\s+";
}

// `GPT_OSS` is a compile-time string literal; `Regex::new` never returns
// `Err` for it. The cascading fallback is required because the workspace
// bans `expect()`/`unwrap()` outside test modules, so a pattern that never
// matches anything ("a^") stands in as a safe default the type checker
// accepts.
static GPT_OSS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(patterns::GPT_OSS).unwrap_or_else(|_| {
        Regex::new("a^").unwrap_or_else(|_| {
            Regex::new(".").unwrap_or_else(|_| unreachable!("\".\" is always a valid pattern"))
        })
    })
});

/// Splits `text` into pretokenizer pieces using the GPT-oss-20b pattern.
///
/// Pieces are non-empty, contiguous, and concatenate back to `text` exactly
/// (the pattern covers every character class, including raw whitespace as a
/// catch-all final alternative).
pub fn split(text: &str) -> Result<Vec<&str>, PretokenizeError> {
    split_with_pattern(text, &GPT_OSS_PATTERN)
}

/// A pretokenizer built from a caller-supplied pattern, for callers who want
/// a different split rule than [`patterns::GPT_OSS`].
pub struct Splitter {
    pattern: Regex,
}

impl Splitter {
    /// Compiles `pattern` as a `fancy-regex` split rule.
    pub fn new(pattern: &str) -> Result<Self, PretokenizeError> {
        let pattern = Regex::new(pattern).map_err(PretokenizeError::InvalidPattern)?;
        Ok(Self { pattern })
    }

    /// Splits `text` using this splitter's pattern.
    pub fn split<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, PretokenizeError> {
        split_with_pattern(text, &self.pattern)
    }
}

fn split_with_pattern<'t>(text: &'t str, re: &Regex) -> Result<Vec<&'t str>, PretokenizeError> {
    let mut pieces = Vec::new();
    for m in re.find_iter(text) {
        let m = m.map_err(PretokenizeError::MatchFailed)?;
        if !m.as_str().is_empty() {
            pieces.push(m.as_str());
        }
    }
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn splits_plain_words_on_leading_space() {
        let pieces = split("the quick fox").expect("pattern compiles");
        assert_eq!(pieces, vec!["the", " quick", " fox"]);
    }

    #[test]
    fn keeps_contractions_attached_to_their_stem() {
        let pieces = split("don't stop").expect("pattern compiles");
        assert_eq!(pieces, vec!["don", "'t", " stop"]);
    }

    #[test]
    fn caps_digit_runs_at_three() {
        let pieces = split("12345").expect("pattern compiles");
        assert_eq!(pieces, vec!["123", "45"]);
    }

    #[test]
    fn trailing_whitespace_not_followed_by_non_space_is_its_own_piece() {
        let pieces = split("a   ").expect("pattern compiles");
        assert_eq!(pieces.concat(), "a   ");
    }

    #[test]
    fn pieces_concatenate_back_to_the_original_text() {
        let text = "The teacher's thick thing:   costs $12,345 today.\nNext line.";
        let pieces = split(text).expect("pattern compiles");
        assert_eq!(pieces.concat(), text);
    }

    #[test]
    fn newlines_form_their_own_run() {
        let pieces = split("a\n\nb").expect("pattern compiles");
        assert_eq!(pieces, vec!["a", "\n\n", "b"]);
    }

    #[test]
    fn custom_splitter_uses_its_own_pattern() {
        let splitter = Splitter::new(r"\d+|\D+").expect("valid pattern");
        let pieces = splitter.split("ab12cd").expect("match succeeds");
        assert_eq!(pieces, vec!["ab", "12", "cd"]);
    }

    #[test]
    fn invalid_custom_pattern_is_rejected_at_construction() {
        let err = Splitter::new("(unterminated").expect_err("pattern is invalid");
        assert!(matches!(err, PretokenizeError::InvalidPattern(_)));
    }
}
