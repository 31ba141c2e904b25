//! Property-based tests for the merge trainer's quantified invariants.
//!
//! Verifies byte preservation, determinism, and idempotence of the rewriter
//! using `proptest`-generated small ASCII corpora, mirroring the teacher's
//! use of `proptest` for algebraic properties of its own merge operation.
#![allow(clippy::expect_used)]

use proptest::prelude::*;
use token_graph_core::rewrite::rewrite;
use token_graph_core::{Token, Trainer, TrainerConfig, Vertex};

fn byte_leaves(s: &str) -> Vertex {
    let leaves: Vec<Vertex> = s.bytes().map(|b| Vertex::token(vec![b])).collect();
    Vertex::sequence(leaves).expect("non-empty input")
}

/// Restrict generated corpora to a small alphabet so merges actually occur
/// within a handful of training iterations.
fn small_ascii_corpus() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('a'), Just('b'), Just('c'), Just(' ')], 2..40)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn byte_preservation_holds_for_any_training_run(corpus in small_ascii_corpus()) {
        let graph = byte_leaves(&corpus);
        let initial_bytes = graph.bytes();
        let mut trainer = Trainer::new(graph);
        trainer.train(8, TrainerConfig::default()).expect("training never fails");
        prop_assert_eq!(trainer.graph().bytes(), initial_bytes);
        for record in trainer.merges() {
            let concat: Vec<u8> = record.candidate.iter().flat_map(Vertex::bytes).collect();
            prop_assert_eq!(record.token.bytes(), concat.as_slice());
        }
    }

    #[test]
    fn determinism_holds_for_any_training_run(corpus in small_ascii_corpus()) {
        let config = TrainerConfig::default();
        let mut t1 = Trainer::new(byte_leaves(&corpus));
        let mut t2 = Trainer::new(byte_leaves(&corpus));
        t1.train(8, config).expect("training never fails");
        t2.train(8, config).expect("training never fails");
        prop_assert_eq!(t1.merges(), t2.merges());
    }

    #[test]
    fn rewrite_is_idempotent_once_a_candidate_no_longer_occurs(corpus in small_ascii_corpus()) {
        let graph = byte_leaves(&corpus);
        let candidate = vec![Vertex::token(b"a".to_vec()), Vertex::token(b"b".to_vec())];
        let replacement = Token::new(b"ab".to_vec());
        let once = rewrite(&graph, &candidate, &replacement);
        let twice = rewrite(&once, &candidate, &replacement);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn token_count_never_increases_during_training(corpus in small_ascii_corpus()) {
        let graph = byte_leaves(&corpus);
        let initial_count = graph.token_count();
        let mut trainer = Trainer::new(graph);
        trainer.train(8, TrainerConfig::default()).expect("training never fails");
        prop_assert!(trainer.graph().token_count() <= initial_count);
    }
}
