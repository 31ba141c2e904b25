/// The rewriter (§4.3): substitutes every non-overlapping, left-to-right
/// occurrence of a merge candidate with the synthesized token that
/// represents it.
use std::rc::Rc;

use crate::vertex::{Token, Vertex};

/// Rewrites `v`, replacing every non-overlapping occurrence of `candidate`
/// with `replacement`.
///
/// Matching is by structural equality (§3.3). In a `Sequence`, matches are
/// taken greedily left to right and never overlap. A `Tree` matches only as
/// its full `(root, children...)` tuple. A `Forest` rewrites each subgraph
/// independently. Recursion descends into every child regardless of whether
/// a replacement fired at this level.
///
/// When a node's children are unchanged by the rewrite (`Rc::ptr_eq` against
/// the originals), the original `Rc` is reused rather than reallocated (§9
/// "Immutability and sharing").
pub fn rewrite(v: &Vertex, candidate: &[Vertex], replacement: &Token) -> Vertex {
    match v {
        Vertex::Token(_) => v.clone(),
        Vertex::Sequence(children) => rewrite_sequence(children, candidate, replacement),
        Vertex::Tree { root, children } => {
            if matches_tree(root, children, candidate) {
                return Vertex::Token(replacement.clone());
            }
            let new_root = rewrite(root, candidate, replacement);
            let new_children: Vec<Vertex> = children
                .iter()
                .map(|c| rewrite(c, candidate, replacement))
                .collect();
            let root_unchanged = new_root == **root;
            let children_unchanged = children.iter().zip(new_children.iter()).all(|(a, b)| a == b);
            if root_unchanged && children_unchanged {
                v.clone()
            } else {
                Vertex::Tree {
                    root: if root_unchanged { Rc::clone(root) } else { Rc::new(new_root) },
                    children: Rc::from(new_children),
                }
            }
        }
        Vertex::Forest(subgraphs) => {
            let new_subgraphs: Vec<Vertex> = subgraphs
                .iter()
                .map(|g| rewrite(g, candidate, replacement))
                .collect();
            if subgraphs.iter().zip(new_subgraphs.iter()).all(|(a, b)| a == b) {
                v.clone()
            } else {
                Vertex::Forest(Rc::from(new_subgraphs))
            }
        }
    }
}

fn matches_tree(root: &Vertex, children: &[Vertex], candidate: &[Vertex]) -> bool {
    candidate.len() == children.len() + 1 && candidate[0] == *root && candidate[1..] == *children
}

fn rewrite_sequence(children: &[Vertex], candidate: &[Vertex], replacement: &Token) -> Vertex {
    let m = candidate.len();
    let mut scanned: Vec<Vertex> = Vec::with_capacity(children.len());
    let mut i = 0;
    while i < children.len() {
        if m >= 1 && i + m <= children.len() && children[i..i + m] == *candidate {
            scanned.push(Vertex::Token(replacement.clone()));
            i += m;
        } else {
            scanned.push(children[i].clone());
            i += 1;
        }
    }

    let recursed: Vec<Vertex> = scanned
        .iter()
        .map(|c| rewrite(c, candidate, replacement))
        .collect();

    match recursed.len() {
        0 => unreachable!("a Sequence always has at least one child before rewriting"),
        1 => recursed.into_iter().next().unwrap_or_else(|| unreachable!()),
        _ => Vertex::Sequence(Rc::from(recursed)),
    }
}
