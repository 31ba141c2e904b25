//! Text collaborators for `token-graph-core`: turning raw strings and IDS
//! decompositions into the `Vertex` graphs the trainer consumes, and back
//! into human-readable display strings.
//!
//! # Modules
//!
//! - [`units`] — byte-leaf and grapheme-cluster leaf builders.
//! - [`pretokenize`] — the GPT-oss-20b contraction/whitespace-aware splitter.
//! - [`words`] — assembles pretokenized pieces into a `Sequence` or `Forest`.
//! - [`ids`] — Ideographic Description Sequence parsing and the character
//!   dictionary used for canonical display of Chinese decompositions.
//! - [`corpus`] — streaming line-oriented corpus ingestion.
//! - [`error`] — this crate's error types.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod corpus;
pub mod error;
pub mod ids;
pub mod pretokenize;
pub mod units;
pub mod words;

pub use error::{CorpusError, IdsError, PretokenizeError};
pub use ids::{parse as parse_ids, Dictionary};
pub use pretokenize::{split as pretokenize, Splitter};
pub use units::{build_bytes, build_graphemes};
pub use words::build_words;
