/// Merge-candidate enumeration (§4.2): for a [`Vertex`], produces every
/// admissible merge tuple under an [`EnumerateConfig`].
use crate::error::ConfigError;
use crate::vertex::Vertex;

/// A candidate merge: an ordered tuple of ≥2 adjacent (or structurally
/// co-located, for `Tree`) vertices.
pub type Candidate = Vec<Vertex>;

/// Enumeration settings threaded explicitly through the enumerator, replacing
/// the source's process-wide mutable flags (§9 "Global configuration").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerateConfig {
    max_merge_size: usize,
    only_minimal_merges: bool,
}

impl EnumerateConfig {
    /// Default arity bound (3) and minimality gate enabled, per §4.2.
    pub const DEFAULT_MAX_MERGE_SIZE: usize = 3;

    /// Validates `max_merge_size >= 2` and builds a config.
    pub fn new(max_merge_size: usize, only_minimal_merges: bool) -> Result<Self, ConfigError> {
        if max_merge_size < 2 {
            return Err(ConfigError::MaxMergeSizeTooSmall {
                got: max_merge_size,
            });
        }
        Ok(Self {
            max_merge_size,
            only_minimal_merges,
        })
    }

    /// The configured upper bound on candidate arity.
    pub fn max_merge_size(&self) -> usize {
        self.max_merge_size
    }

    /// Whether the minimality gate is active.
    pub fn only_minimal_merges(&self) -> bool {
        self.only_minimal_merges
    }
}

impl Default for EnumerateConfig {
    fn default() -> Self {
        Self {
            max_merge_size: Self::DEFAULT_MAX_MERGE_SIZE,
            only_minimal_merges: true,
        }
    }
}

/// Enumerates every admissible merge candidate reachable from `v` (§4.2).
///
/// The result is collected eagerly into a `Vec` rather than a lazily-driven
/// iterator: `Vertex`'s fields are `Rc`-backed, so cloning the elements of a
/// candidate is a handful of pointer copies, and every caller in this crate
/// (the trainer's frequency tally) consumes the full enumeration on every
/// iteration anyway.
pub fn candidates(v: &Vertex, config: EnumerateConfig) -> Vec<Candidate> {
    let mut out = Vec::new();
    collect_candidates(v, config, &mut out);
    out
}

fn collect_candidates(v: &Vertex, config: EnumerateConfig, out: &mut Vec<Candidate>) {
    match v {
        Vertex::Token(_) => {}
        Vertex::Sequence(children) => {
            for child in children.iter() {
                collect_candidates(child, config, out);
            }
            collect_sequence_candidates(children, config, out);
        }
        Vertex::Tree { root, children } => {
            collect_candidates(root, config, out);
            for child in children.iter() {
                collect_candidates(child, config, out);
            }
            let mut tuple = Vec::with_capacity(1 + children.len());
            tuple.push((**root).clone());
            tuple.extend(children.iter().cloned());
            out.push(tuple);
        }
        Vertex::Forest(subgraphs) => {
            for subgraph in subgraphs.iter() {
                collect_candidates(subgraph, config, out);
            }
        }
    }
}

/// Yields the Sequence-local candidates for one level (§4.2), honoring the
/// minimality gate.
///
/// Without the gate, every starting index contributes every length in
/// `2..=min(max_merge_size, remaining)`. With the gate, a starting index only
/// contributes lengths `2..=run_len`, where `run_len` is the length of the
/// maximal run of consecutive `Token` children beginning at that index
/// (itself bounded by `max_merge_size` and the remaining sequence length) —
/// the moment a non-`Token` child is reached, no longer candidate starting
/// at this index is admitted.
fn collect_sequence_candidates(children: &[Vertex], config: EnumerateConfig, out: &mut Vec<Candidate>) {
    let n = children.len();
    for i in 0..n {
        let max_len = config.max_merge_size.min(n - i);
        if max_len < 2 {
            continue;
        }
        if config.only_minimal_merges {
            if !children[i].is_token() {
                continue;
            }
            let mut run_len = 1;
            while run_len < max_len && children[i + run_len].is_token() {
                run_len += 1;
            }
            for len in 2..=run_len {
                out.push(children[i..i + len].to_vec());
            }
        } else {
            for len in 2..=max_len {
                out.push(children[i..i + len].to_vec());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn tok(s: &str) -> Vertex {
        Vertex::token(s.as_bytes())
    }

    fn byte_leaves(s: &str) -> Vertex {
        let leaves: Vec<Vertex> = s.bytes().map(|b| Vertex::token(vec![b])).collect();
        Vertex::sequence(leaves).expect("non-empty")
    }

    #[test]
    fn config_rejects_max_merge_size_below_two() {
        assert_eq!(
            EnumerateConfig::new(1, true),
            Err(ConfigError::MaxMergeSizeTooSmall { got: 1 })
        );
        assert_eq!(
            EnumerateConfig::new(0, true),
            Err(ConfigError::MaxMergeSizeTooSmall { got: 0 })
        );
    }

    #[test]
    fn config_accepts_two_and_above() {
        assert!(EnumerateConfig::new(2, true).is_ok());
        assert!(EnumerateConfig::new(10, false).is_ok());
    }

    #[test]
    fn token_has_no_candidates() {
        let v = tok("a");
        let config = EnumerateConfig::default();
        assert!(candidates(&v, config).is_empty());
    }

    #[test]
    fn lalaland_length_two_candidate_frequencies_match_scenario_four() {
        let v = byte_leaves("lalaland");
        let config = EnumerateConfig::new(2, true).expect("valid config");
        let cands = candidates(&v, config);
        let mut freq: std::collections::HashMap<Vec<u8>, usize> = std::collections::HashMap::new();
        for c in &cands {
            let key: Vec<u8> = c.iter().flat_map(Vertex::bytes).collect();
            *freq.entry(key).or_insert(0) += 1;
        }
        assert_eq!(freq.get(b"la".as_slice()), Some(&3));
        assert_eq!(freq.get(b"al".as_slice()), Some(&2));
        assert_eq!(freq.get(b"an".as_slice()), Some(&1));
        assert_eq!(freq.get(b"nd".as_slice()), Some(&1));
        assert_eq!(freq.len(), 4);
    }

    #[test]
    fn lalaland_max_merge_size_three_yields_eight_distinct_candidates() {
        let v = byte_leaves("lalaland");
        let config = EnumerateConfig::new(3, true).expect("valid config");
        let cands = candidates(&v, config);
        let mut freq: std::collections::HashMap<Vec<u8>, usize> = std::collections::HashMap::new();
        for c in &cands {
            let key: Vec<u8> = c.iter().flat_map(Vertex::bytes).collect();
            *freq.entry(key).or_insert(0) += 1;
        }
        assert_eq!(freq.len(), 8);
        assert_eq!(freq.get(b"lal".as_slice()), Some(&2));
        assert_eq!(freq.get(b"ala".as_slice()), Some(&2));
        assert_eq!(freq.get(b"lan".as_slice()), Some(&1));
        assert_eq!(freq.get(b"and".as_slice()), Some(&1));
    }

    #[test]
    fn minimality_gate_stops_at_first_non_token() {
        let non_token = Vertex::tree(tok("r"), vec![tok("c")]);
        let v = Vertex::sequence(vec![tok("a"), non_token, tok("b"), tok("c")]).expect("4 children");
        let config = EnumerateConfig::new(3, true).expect("valid config");
        let cands = candidates(&v, config);
        // No candidate may start at index 0 (a Token) and include index 1 (not a Token).
        for c in &cands {
            assert!(
                !(c.len() >= 2 && c[0] == tok("a")),
                "candidate starting at the Token 'a' must not extend across the non-Token sibling: {c:?}"
            );
        }
    }

    #[test]
    fn tree_yields_exactly_one_candidate_at_its_own_level() {
        let v = Vertex::tree(tok("r"), vec![tok("a"), tok("b")]);
        let config = EnumerateConfig::default();
        let cands = candidates(&v, config);
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0], vec![tok("r"), tok("a"), tok("b")]);
    }

    #[test]
    fn forest_never_yields_cross_subgraph_candidates() {
        let a = byte_leaves("aa");
        let b = byte_leaves("bb");
        let v = Vertex::forest(vec![a, b]).expect("2 subgraphs");
        let config = EnumerateConfig::new(4, true).expect("valid config");
        let cands = candidates(&v, config);
        for c in &cands {
            let joined: Vec<u8> = c.iter().flat_map(Vertex::bytes).collect();
            assert!(
                joined == b"aa" || joined == b"bb",
                "candidate must not cross the forest boundary: {joined:?}"
            );
        }
    }

    #[test]
    fn nested_tree_merge_matches_scenario_six() {
        // Tree(⿱, [十, Tree(⿱, [乛, 头])])
        let inner = Vertex::tree(tok("\u{2ff1}"), vec![tok("\u{4e5b}"), tok("\u{5934}")]);
        let outer = Vertex::tree(tok("\u{2ff1}"), vec![tok("\u{5341}"), inner.clone()]);
        let config = EnumerateConfig::default();
        let cands = candidates(&outer, config);
        assert!(cands.contains(&vec![tok("\u{2ff1}"), tok("\u{4e5b}"), tok("\u{5934}")]));
        assert!(cands.contains(&vec![tok("\u{2ff1}"), tok("\u{5341}"), inner]));
    }
}
