//! Streaming corpus ingestion: reads lines from any `BufRead` source without
//! loading the whole corpus into memory at once.
//!
//! Mirrors the teacher's I/O posture (explicit `Result`-returning reads, no
//! panics on malformed input) rather than the original Python source's
//! `open(...).readlines()` convenience.
use std::io::BufRead;

use crate::error::CorpusError;

/// Reads non-blank lines from `reader`.
///
/// `BufRead::lines` already strips each line's trailing newline (and `\r`);
/// blank lines (empty, or whitespace-only) are skipped since they
/// contribute nothing to either pretokenization or training. Leading
/// whitespace on a kept line is preserved: it is semantically significant to
/// the pretokenizer (e.g. `" the"` splits differently than `"the"`), so it
/// must not be trimmed away here.
pub fn lines(reader: impl BufRead) -> impl Iterator<Item = Result<String, CorpusError>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => {
            if line.trim().is_empty() {
                None
            } else {
                Some(Ok(line))
            }
        }
        Err(err) => Some(Err(CorpusError::from(err))),
    })
}
