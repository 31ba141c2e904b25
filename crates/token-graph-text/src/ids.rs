//! Ideographic Description Sequence (IDS) parsing and the character
//! dictionary that maps canonical CJK characters to and from their IDS
//! decomposition.
//!
//! Grounded on `chinese/ideographic_description_sequences.py`: the IDC
//! ranges, the binary/ternary arity split, and the recursive-descent parser
//! shape (`parse_ideographic_description_sequences`/`IDSNode`) are carried
//! over directly. The Python dataclass `IDSNode` becomes a `Vertex::Tree`
//! whose root is the IDC token and whose children are the decomposed
//! operands, so no separate IDS-specific type is needed downstream.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use token_graph_core::Vertex;

use crate::error::IdsError;

/// Ideographic Description Characters taking exactly two operands.
const BINARY_IDCS: [char; 10] = [
    '\u{2FF0}', '\u{2FF1}', '\u{2FF4}', '\u{2FF5}', '\u{2FF6}', '\u{2FF7}', '\u{2FF8}', '\u{2FF9}',
    '\u{2FFA}', '\u{2FFB}',
];

/// Ideographic Description Characters taking exactly three operands.
const TERNARY_IDCS: [char; 2] = ['\u{2FF2}', '\u{2FF3}'];

fn arity(c: char) -> Option<usize> {
    if BINARY_IDCS.contains(&c) {
        Some(2)
    } else if TERNARY_IDCS.contains(&c) {
        Some(3)
    } else {
        None
    }
}

/// Parses an Ideographic Description Sequence into a `Vertex::Tree` (or a
/// bare `Vertex::Token` if `ids` is a single non-IDC character).
///
/// Recursive descent over `ids`'s characters: an IDC consumes its declared
/// arity worth of following nodes as children, recursively; any other
/// character is a leaf. The whole input must parse as exactly one tree, with
/// no leftover characters.
pub fn parse(ids: &str) -> Result<Vertex, IdsError> {
    let chars: Vec<char> = ids.chars().collect();
    if chars.is_empty() {
        return Err(IdsError::EmptyInput);
    }
    let mut pos = 0;
    let node = parse_node(&chars, &mut pos)?;
    if pos != chars.len() {
        return Err(IdsError::TrailingInput { at: pos });
    }
    Ok(node)
}

fn parse_node(chars: &[char], pos: &mut usize) -> Result<Vertex, IdsError> {
    let Some(&c) = chars.get(*pos) else {
        return Err(IdsError::UnexpectedEnd { at: *pos });
    };
    *pos += 1;
    match arity(c) {
        Some(n) => {
            let mut children = Vec::with_capacity(n);
            for _ in 0..n {
                children.push(parse_node(chars, pos)?);
            }
            let root = Vertex::token(c.to_string().into_bytes());
            Ok(Vertex::tree(root, children))
        }
        None => Ok(Vertex::token(c.to_string().into_bytes())),
    }
}

/// A bidirectional character-to-IDS dictionary, loadable from a JSON map of
/// `{character: ids_string}`.
///
/// Grounded on `load_characters_dictionary`/`reversed_characters_dictionary`
/// in the original source: the forward map is the data file as given, and
/// the reverse map is built once at load time rather than recomputed per
/// lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    by_character: HashMap<String, String>,
    #[serde(skip)]
    by_ids: HashMap<String, String>,
}

impl Dictionary {
    /// Loads a dictionary from a JSON string mapping characters to their IDS
    /// decomposition, e.g. `{"好": "⿰女子"}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let by_character: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::from_map(by_character))
    }

    /// Builds a dictionary directly from a character-to-IDS map.
    pub fn from_map(by_character: HashMap<String, String>) -> Self {
        let by_ids = by_character
            .iter()
            .map(|(ch, ids)| (ids.clone(), ch.clone()))
            .collect();
        Self {
            by_character,
            by_ids,
        }
    }

    /// Returns the IDS decomposition for `character`, if known.
    pub fn ids_for_character(&self, character: &str) -> Option<&str> {
        self.by_character.get(character).map(String::as_str)
    }

    /// Returns the canonical character for `ids`, if this exact IDS string is
    /// a known decomposition.
    pub fn character_for_ids(&self, ids: &str) -> Option<&str> {
        self.by_ids.get(ids).map(String::as_str)
    }

    /// Returns a closure usable as `Vertex::to_display_string`'s
    /// `reverse_ids` argument: looks up the byte-serialized form of a
    /// decomposed subgraph and returns its canonical character, if any.
    pub fn reverse_lookup(&self) -> impl Fn(&str) -> Option<String> + '_ {
        move |ids: &str| self.character_for_ids(ids).map(str::to_owned)
    }
}
