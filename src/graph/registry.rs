use std::collections::HashMap;

use crate::graph::traits::Label;
use crate::{Error, Result};

/// Assigns each distinct label a dense index in registration order
#[derive(Debug, Clone)]
pub struct NodeRegistry<L>
where
    L: Label,
{
    /// label -> index
    index: HashMap<L, usize>,
    /// index -> label
    labels: Vec<L>,
}

impl<L> Default for NodeRegistry<L>
where
    L: Label,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> NodeRegistry<L>
where
    L: Label,
{
    /// Creates an empty registry
    pub fn new() -> Self {
        NodeRegistry {
            index: HashMap::new(),
            labels: Vec::new(),
        }
    }

    /// Returns the index of `label`, registering it on first sight
    pub fn index_of(&mut self, label: L) -> usize {
        if let Some(&idx) = self.index.get(&label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label.clone());
        self.index.insert(label, idx);
        idx
    }

    /// Looks up a label without registering it
    pub fn lookup(&self, label: &L) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Like [`lookup`](Self::lookup) but fails with [`Error::UnknownLabel`]
    pub fn require(&self, label: &L) -> Result<usize> {
        self.lookup(label)
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }

    /// Returns the label issued for `index`
    pub fn label_of(&self, index: usize) -> Result<&L> {
        self.labels.get(index).ok_or(Error::InvalidVertex(index))
    }

    /// Maps a sequence of indices back to labels
    pub fn labels_for(&self, vertices: &[usize]) -> Result<Vec<L>> {
        vertices
            .iter()
            .map(|&v| self.label_of(v).cloned())
            .collect()
    }

    /// Labels in index order
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
