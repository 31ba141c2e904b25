/// The heterogeneous token-graph data model: [`Token`], [`Vertex`], byte
/// serialization, and the smart constructors that enforce the arity
/// invariants of `Sequence`, `Tree`, and `Forest`.
use std::rc::Rc;

use crate::error::ConstructError;

/// An atomic, immutable byte string. The only leaf kind and the only kind a
/// merge can ever produce.
///
/// Equality and hashing are by value (two `Token`s with the same bytes are
/// equal), which falls directly out of deriving on the `Rc<[u8]>` payload:
/// `Rc`'s own `PartialEq`/`Hash` impls already compare/hash through the
/// pointee rather than the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(Rc<[u8]>);

impl Token {
    /// Builds a `Token` from any owned or borrowed byte source.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Rc::from(bytes.into()))
    }

    /// The token's raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

/// A node in a heterogeneous token graph.
///
/// Children are stored behind `Rc` so that rewriting (see [`crate::rewrite`])
/// can reuse unchanged subtrees instead of deep-cloning them (§9 of the
/// design: "Immutability and sharing").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Vertex {
    /// An atomic leaf.
    Token(Token),
    /// Ordered adjacency of ≥2 children.
    Sequence(Rc<[Vertex]>),
    /// A structural root over an ordered tuple of ≥1 children. Children are
    /// not adjacent to one another; only the whole `(root, children...)`
    /// tuple is ever a merge candidate.
    Tree {
        root: Rc<Vertex>,
        children: Rc<[Vertex]>,
    },
    /// ≥2 disjoint subgraphs with no adjacency between them.
    Forest(Rc<[Vertex]>),
}

impl Vertex {
    /// Builds a bare `Token` vertex.
    pub fn token(bytes: impl Into<Vec<u8>>) -> Self {
        Vertex::Token(Token::new(bytes))
    }

    /// Builds a `Sequence` from a list of children.
    ///
    /// A single-element list collapses to that element directly (it is not
    /// wrapped in a one-child `Sequence`); an empty list is a construction
    /// error, since there is nothing to collapse to.
    pub fn sequence(children: Vec<Vertex>) -> Result<Self, ConstructError> {
        match children.len() {
            0 => Err(ConstructError::EmptyChildren { kind: "Sequence" }),
            1 => Ok(children.into_iter().next().unwrap_or_else(|| unreachable!())),
            _ => Ok(Vertex::Sequence(Rc::from(children))),
        }
    }

    /// Builds a `Forest` from a list of disjoint subgraphs.
    ///
    /// Collapse/error semantics mirror [`Vertex::sequence`].
    pub fn forest(subgraphs: Vec<Vertex>) -> Result<Self, ConstructError> {
        match subgraphs.len() {
            0 => Err(ConstructError::EmptyChildren { kind: "Forest" }),
            1 => Ok(subgraphs.into_iter().next().unwrap_or_else(|| unreachable!())),
            _ => Ok(Vertex::Forest(Rc::from(subgraphs))),
        }
    }

    /// Builds a `Tree` from a root and its ordered children.
    ///
    /// An empty child list collapses to the root alone (a "tree" cannot have
    /// fewer than zero children, and a root is required by construction, so
    /// this never errors).
    pub fn tree(root: Vertex, children: Vec<Vertex>) -> Self {
        if children.is_empty() {
            root
        } else {
            Vertex::Tree {
                root: Rc::new(root),
                children: Rc::from(children),
            }
        }
    }

    /// `true` if this vertex is a bare `Token`.
    pub fn is_token(&self) -> bool {
        matches!(self, Vertex::Token(_))
    }

    /// The canonical byte serialization `bytes(v)` (§3.2): concatenation of
    /// every descendant token's bytes, in order.
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_bytes(&mut out);
        out
    }

    fn write_bytes(&self, out: &mut Vec<u8>) {
        match self {
            Vertex::Token(t) => out.extend_from_slice(t.bytes()),
            Vertex::Sequence(children) | Vertex::Forest(children) => {
                for child in children.iter() {
                    child.write_bytes(out);
                }
            }
            Vertex::Tree { root, children } => {
                root.write_bytes(out);
                for child in children.iter() {
                    child.write_bytes(out);
                }
            }
        }
    }

    /// Count of `Token` leaves reachable from this vertex (`|v|` in §8.1's
    /// monotone-compression property).
    pub fn token_count(&self) -> usize {
        match self {
            Vertex::Token(_) => 1,
            Vertex::Sequence(children) | Vertex::Forest(children) => {
                children.iter().map(Vertex::token_count).sum()
            }
            Vertex::Tree { root, children } => {
                root.token_count() + children.iter().map(Vertex::token_count).sum::<usize>()
            }
        }
    }

    /// Renders this vertex for external display (§6.4): UTF-8 decoding of
    /// its bytes with U+FFFD replacement on ill-formed sequences, unless
    /// `reverse_ids` recognizes the decoded string as a known IDS and
    /// returns its canonical character form instead.
    pub fn to_display_string(&self, reverse_ids: Option<&dyn Fn(&str) -> Option<String>>) -> String {
        let decoded = String::from_utf8_lossy(&self.bytes()).into_owned();
        if let Some(lookup) = reverse_ids {
            if let Some(canonical) = lookup(&decoded) {
                return canonical;
            }
        }
        decoded
    }
}
