//! Trains ordinary byte-pair merges (`max_merge_size = 2`) on a handful of
//! inline sample sentences and prints the resulting merge list.
//!
//! Mirrors `examples/bpe.py`'s `train_bpe_tokenizer`, minus the dataset
//! download: BPE is BNE with `n = 2`.
use token_graph_core::{EnumerateConfig, Trainer, TrainerConfig, Vertex};
use token_graph_text::build_words;

const SAMPLE_TEXTS: &[&str] = &[
    "The quick brown fox jumps over the lazy dog.",
    "The dog barks at the fox in the forest.",
    "The forest is full of the sound of the wind in the trees.",
];

fn main() {
    let subgraphs: Vec<Vertex> = SAMPLE_TEXTS
        .iter()
        .map(|text| build_words(text, false).unwrap_or_else(|_| Vertex::token(Vec::new())))
        .collect();
    let graph = Vertex::forest(subgraphs).unwrap_or_else(|_| Vertex::token(Vec::new()));

    let config = TrainerConfig {
        enumerate: EnumerateConfig::new(2, true).unwrap_or_default(),
        only_tokens: true,
    };
    let mut trainer = Trainer::new(graph);
    if let Err(err) = trainer.train(10, config) {
        eprintln!("training failed: {err}");
        return;
    }

    for record in trainer.merges() {
        let pieces: Vec<String> = record
            .candidate
            .iter()
            .map(|v| v.to_display_string(None))
            .collect();
        println!("{:?} -> {:?}", pieces, record.token.bytes());
    }
}
