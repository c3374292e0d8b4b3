//! Path reconstruction from predecessor tables, and the vertex-disjointness
//! check used by the no-revisit policy.

use std::collections::HashSet;

/// Walks `predecessors` backward from `to` until `from` and returns the
/// forward sequence `from ..= to`.
///
/// Returns `None` if the chain ends before reaching `from`, or runs longer
/// than the table (a cycle in the predecessor links).
pub fn reconstruct(from: usize, to: usize, predecessors: &[Option<usize>]) -> Option<Vec<usize>> {
    if from >= predecessors.len() || to >= predecessors.len() {
        return None;
    }

    let mut path = vec![to];
    let mut current = to;

    while current != from {
        match predecessors[current] {
            Some(pred) => current = pred,
            None => {
                log::warn!("Predecessor chain from {} breaks at {} before reaching {}", to, current, from);
                return None;
            }
        }
        path.push(current);

        if path.len() > predecessors.len() {
            log::warn!("Predecessor chain from {} exceeds graph size, likely a cycle", to);
            return None;
        }
    }

    path.reverse();
    Some(path)
}

/// Returns true if `a` and `b` share any vertex other than `excluded`.
///
/// Only membership matters, not the position along either path.
pub fn shares_vertex(a: &[usize], b: &[usize], excluded: usize) -> bool {
    let seen: HashSet<usize> = a.iter().copied().filter(|&v| v != excluded).collect();
    b.iter().any(|v| *v != excluded && seen.contains(v))
}

/// Joins two hub-rooted half paths into `start -> .. -> hub -> .. -> end`.
///
/// `to_start` and `to_end` both begin at the hub; the hub is kept once.
pub fn compose_via_hub(to_start: &[usize], to_end: &[usize]) -> Vec<usize> {
    let mut full = Vec::with_capacity(to_start.len() + to_end.len().saturating_sub(1));
    full.extend(to_start.iter().rev().copied());
    full.extend(to_end.iter().skip(1).copied());
    full
}
