/// Error types for this crate's text collaborators (pretokenization, IDS
/// parsing, corpus ingress). Follows `token-graph-core`'s hand-rolled error
/// style: plain enums, manual `Display`/`Error` impls, no derive-macro error
/// crates.
use std::fmt;
use std::io;

/// Raised when the pretokenizer's regex pattern fails to compile or to
/// execute.
#[derive(Debug)]
pub enum PretokenizeError {
    /// The configured split pattern is not a valid `fancy-regex` pattern.
    InvalidPattern(fancy_regex::Error),
    /// Matching against the input failed (catastrophic backtracking guard
    /// tripped, or similar `fancy-regex` runtime failure).
    MatchFailed(fancy_regex::Error),
}

impl fmt::Display for PretokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(err) => write!(f, "invalid pretokenizer pattern: {err}"),
            Self::MatchFailed(err) => write!(f, "pretokenizer match failed: {err}"),
        }
    }
}

impl std::error::Error for PretokenizeError {}

/// Raised by [`crate::ids::parse`] when an IDS string is malformed.
///
/// Per the core's error handling design (§7 "Malformed IDS"), this is a
/// collaborator-level error: the core itself is never exposed to a broken
/// IDS string, since callers are expected to skip characters that fail to
/// parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdsError {
    /// The input string had no characters at all.
    EmptyInput,
    /// An IDC was the last character, leaving no room for its operands.
    UnexpectedEnd {
        /// Character offset where parsing ran out of input.
        at: usize,
    },
    /// Characters remained after a complete tree was parsed.
    TrailingInput {
        /// Character offset of the first unconsumed character.
        at: usize,
    },
}

impl fmt::Display for IdsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty IDS string"),
            Self::UnexpectedEnd { at } => {
                write!(f, "unexpected end of IDS string at position {at}")
            }
            Self::TrailingInput { at } => {
                write!(f, "extra characters after parsing IDS string at position {at}")
            }
        }
    }
}

impl std::error::Error for IdsError {}

/// Raised while streaming a text corpus.
#[derive(Debug)]
pub enum CorpusError {
    /// The underlying reader failed.
    Io(io::Error),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "corpus I/O error: {err}"),
        }
    }
}

impl std::error::Error for CorpusError {}

impl From<io::Error> for CorpusError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_error_messages_contain_position() {
        assert!(IdsError::UnexpectedEnd { at: 3 }.to_string().contains('3'));
        assert!(IdsError::TrailingInput { at: 7 }.to_string().contains('7'));
    }

    #[test]
    fn empty_input_message_is_stable() {
        assert_eq!(IdsError::EmptyInput.to_string(), "empty IDS string");
    }
}
