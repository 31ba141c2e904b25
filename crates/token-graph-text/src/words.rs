//! Builds a token graph from raw text by pretokenizing into word-like pieces
//! and wrapping the result as a `Sequence` (pieces are adjacent, e.g. ordinary
//! prose) or a `Forest` (pieces are independent, e.g. a bag of words).
//!
//! Grounded on `graphs/words.py`'s `words()`/`pretokenize()` functions: each
//! piece becomes its own grapheme-leaf subgraph, and a pretokenization that
//! yields only one piece collapses to that piece's bare `Vertex`.
use token_graph_core::Vertex;

use crate::error::PretokenizeError;
use crate::pretokenize::split;
use crate::units::build_graphemes;

/// Builds a token graph from `text`.
///
/// When `connected` is `true`, pretokenized pieces are wrapped in a
/// `Sequence` (they are read left-to-right as a single run of connected
/// material, the normal case for ordinary prose). When `false`, pieces are
/// wrapped in a `Forest` (they are treated as independent units, e.g. when
/// training against a deduplicated word list where adjacency carries no
/// meaning).
///
/// A single-piece input collapses to that piece's own `Vertex`, matching
/// `Vertex::sequence`/`Vertex::forest`'s own singleton-collapse rule.
pub fn build_words(text: &str, connected: bool) -> Result<Vertex, PretokenizeError> {
    let pieces = split(text)?;
    let subgraphs: Vec<Vertex> = pieces.into_iter().map(build_graphemes).collect();
    Ok(if connected {
        match Vertex::sequence(subgraphs) {
            Ok(v) => v,
            Err(_) => Vertex::token(Vec::new()),
        }
    } else {
        match Vertex::forest(subgraphs) {
            Ok(v) => v,
            Err(_) => Vertex::token(Vec::new()),
        }
    })
}
