//! Core graph model and merge trainer for heterogeneous token graphs.
//!
//! Generalizes Byte-Pair Encoding (and its n-ary relative, BNE) to a token
//! graph that is not necessarily a flat sequence: tree-structured merge
//! units (e.g. Chinese character decompositions) and disconnected forests
//! of subgraphs are first-class alongside ordinary adjacency.
//!
//! # Modules
//!
//! - [`vertex`] — the `Token`/`Vertex` data model, byte serialization, and
//!   the smart constructors that enforce arity invariants.
//! - [`enumerate`] — lazy-in-spirit merge-candidate enumeration, including
//!   the minimality gate that keeps Sequence merges from crossing
//!   already-structural (non-Token) boundaries.
//! - [`rewrite`] — the substitution algorithm that applies one merge
//!   everywhere, left to right, non-overlapping.
//! - [`trainer`] — the outer selection loop: enumerate, tally, score,
//!   tie-break, rewrite, record.
//! - [`error`] — construction, configuration, and training error types.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod enumerate;
pub mod error;
pub mod rewrite;
pub mod trainer;
pub mod vertex;

pub use enumerate::{candidates, Candidate, EnumerateConfig};
pub use error::{ConfigError, ConstructError, TrainerError};
pub use rewrite::rewrite as apply_rewrite;
pub use trainer::{MergeRecord, Trainer, TrainerConfig};
pub use vertex::{Token, Vertex};

/// Returns the current version of the token-graph-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
