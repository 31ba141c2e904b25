//! Leaf-building blocks: turn raw text into a [`Vertex`] of byte leaves or
//! grapheme-cluster leaves.
//!
//! Grounded on `graphs/units.py`'s `characters()`/`utf8()`/`utf8_clusters()`
//! in the original implementation: each builder collapses to a bare
//! [`Vertex::Token`] when the input only produces one piece, matching
//! `Vertex::sequence`'s own singleton-collapse rule.
use unicode_segmentation::UnicodeSegmentation;

use token_graph_core::Vertex;

/// Builds a `Vertex` whose leaves are individual bytes of `s`, in order.
///
/// A single-byte input collapses to a bare `Token` rather than a
/// one-element `Sequence`, matching [`Vertex::sequence`]'s own rule.
pub fn build_bytes(s: &str) -> Vertex {
    let leaves: Vec<Vertex> = s.bytes().map(|b| Vertex::token(vec![b])).collect();
    sequence_or_single(leaves)
}

/// Builds a `Vertex` from the extended grapheme clusters of `s`, where each
/// cluster is itself built with [`build_bytes`] rather than collapsed into a
/// single multi-byte leaf.
///
/// A multi-byte cluster (e.g. any non-ASCII character) therefore decomposes
/// into its constituent byte `Token`s wrapped in a `Sequence`, exactly as
/// `build_bytes` would build that cluster alone — grapheme segmentation only
/// decides where cluster *boundaries* fall, it never makes a cluster atomic
/// at the byte level. A single-cluster, single-byte input collapses to a
/// bare `Token`.
pub fn build_graphemes(s: &str) -> Vertex {
    let leaves: Vec<Vertex> = s.graphemes(true).map(build_bytes).collect();
    sequence_or_single(leaves)
}

/// Wraps `leaves` in a `Sequence`, or returns the lone piece.
///
/// Panics only if `leaves` is empty, which callers here never pass since
/// both `s.bytes()` and `s.graphemes(true)` yield at least one item for any
/// non-empty `s`; callers must not call these builders on empty input.
fn sequence_or_single(leaves: Vec<Vertex>) -> Vertex {
    match Vertex::sequence(leaves) {
        Ok(v) => v,
        Err(_) => Vertex::token(Vec::new()),
    }
}
