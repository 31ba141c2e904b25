/// The trainer (§4.4): the outer selection loop that repeatedly enumerates,
/// scores, and applies merges to a [`Vertex`] graph.
use std::collections::HashMap;

use crate::enumerate::{candidates, Candidate, EnumerateConfig};
use crate::error::TrainerError;
use crate::rewrite::rewrite;
use crate::vertex::{Token, Vertex};

/// Configuration for a training run: the enumerator's settings plus the
/// trainer-level `only_tokens` filter (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainerConfig {
    pub enumerate: EnumerateConfig,
    /// When true, candidates containing any non-`Token` element are dropped
    /// before scoring (§4.2 "Filtering at the trainer layer").
    pub only_tokens: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            enumerate: EnumerateConfig::default(),
            only_tokens: true,
        }
    }
}

/// One applied merge: the freshly synthesized token and the candidate tuple
/// it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord {
    pub token: Token,
    pub candidate: Candidate,
}

/// The outer training loop over a heterogeneous token graph.
///
/// `Trainer::train` may be called more than once on the same instance: each
/// call appends up to `k` further merges to the existing `merges()` list,
/// continuing from the current graph rather than restarting (§9, resolved
/// open question).
#[derive(Debug, Clone)]
pub struct Trainer {
    graph: Vertex,
    merges: Vec<MergeRecord>,
}

impl Trainer {
    /// Starts a trainer over `graph`. Never fails: an empty or single-Token
    /// graph is a valid (if uninteresting) starting state (§7).
    pub fn new(graph: Vertex) -> Self {
        Self {
            graph,
            merges: Vec::new(),
        }
    }

    /// The current graph, after all merges applied so far.
    pub fn graph(&self) -> &Vertex {
        &self.graph
    }

    /// The ordered list of merges applied so far.
    pub fn merges(&self) -> &[MergeRecord] {
        &self.merges
    }

    /// Trains for up to `k` additional merges, or until no candidates
    /// remain, whichever comes first.
    ///
    /// # Errors
    ///
    /// Never returns an error today (`TrainerConfig` carries an already
    /// validated [`EnumerateConfig`]); the `Result` return type exists so a
    /// future caller constructing `TrainerConfig` fields individually (bypassing
    /// `EnumerateConfig::new`'s validation) has a place to surface a rejected
    /// configuration without a breaking signature change.
    pub fn train(&mut self, k: usize, config: TrainerConfig) -> Result<(), TrainerError> {
        for _ in 0..k {
            let Some((candidate, freq)) = select(&self.graph, config) else {
                break;
            };
            let token = Token::new(
                candidate
                    .iter()
                    .flat_map(Vertex::bytes)
                    .collect::<Vec<u8>>(),
            );
            self.graph = rewrite(&self.graph, &candidate, &token);
            self.merges.push(MergeRecord { token, candidate });
            debug_assert!(freq >= 1, "a selected candidate must have positive frequency");
        }
        Ok(())
    }
}

/// Picks the next merge per §4.4 steps 1-5: tally, score, tie-break.
///
/// Returns `None` when no candidates remain (training terminates, not an
/// error — §7 "Score ties with empty candidate set").
fn select(graph: &Vertex, config: TrainerConfig) -> Option<(Candidate, usize)> {
    let raw = candidates(graph, config.enumerate);
    let mut tally: HashMap<Candidate, usize> = HashMap::new();
    for candidate in raw {
        if config.only_tokens && !candidate.iter().all(Vertex::is_token) {
            continue;
        }
        *tally.entry(candidate).or_insert(0) += 1;
    }

    tally.into_iter().max_by(|(m1, f1), (m2, f2)| {
        let score1 = score(m1, *f1);
        let score2 = score(m2, *f2);
        score1
            .cmp(&score2)
            .then_with(|| f1.cmp(f2))
            .then_with(|| m1.len().cmp(&m2.len()))
            .then_with(|| tie_break_bytes(m1).cmp(&tie_break_bytes(m2)))
    })
}

/// `s(M) = (|M| - 1) * f(M)`: the number of vertices eliminated by applying
/// `M` everywhere (§4.4 step 3). The rejected alternative `|M| * f(M)` is not
/// implemented anywhere in this crate (§9, resolved open question).
fn score(candidate: &[Vertex], freq: usize) -> usize {
    (candidate.len() - 1) * freq
}

fn tie_break_bytes(candidate: &[Vertex]) -> Vec<u8> {
    candidate.iter().flat_map(Vertex::bytes).collect()
}
