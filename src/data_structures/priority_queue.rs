use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier of `(vertex, tentative distance)` entries.
///
/// Entries are never decreased in place; a vertex is pushed again at its new
/// priority and stale entries are skipped by the caller on pop.
#[derive(Debug)]
pub struct DistanceQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, usize)>>,
    /// Total pushes over the queue's lifetime
    pushes: usize,
}

impl<P> Default for DistanceQueue<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> DistanceQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
            pushes: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts `vertex` at `priority`
    pub fn push(&mut self, vertex: usize, priority: P) {
        self.pushes += 1;
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority; ties go to the smaller vertex
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (*vertex, *priority))
    }

    /// Number of pushes performed, stale entries included
    pub fn pushes(&self) -> usize {
        self.pushes
    }
}
