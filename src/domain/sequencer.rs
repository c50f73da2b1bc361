//! Pre-order sequencing of a parent index.

use std::collections::HashSet;

use tracing::{instrument, trace};

use crate::domain::entities::{CategoryId, CategoryNode};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::index::ParentIndex;

/// Records emitted by a traversal together with the ids that were visited.
#[derive(Debug)]
pub struct Sequence<'a, T> {
    pub records: Vec<&'a T>,
    pub visited: HashSet<CategoryId>,
}

impl<'a, T> Sequence<'a, T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.visited.contains(&id)
    }
}

/// Walks a [`ParentIndex`] depth-first, emitting every node before its
/// descendants and siblings in index order.
pub struct TreeSequencer<'i, 'a, T> {
    index: &'i ParentIndex<'a, T>,
}

impl<'i, 'a, T: CategoryNode> TreeSequencer<'i, 'a, T> {
    pub fn new(index: &'i ParentIndex<'a, T>) -> Self {
        Self { index }
    }

    /// Produce the pre-order sequence below `root_parent_id`.
    ///
    /// Uses an explicit stack of `(parent id, next child position)` frames
    /// instead of recursion. Emitting an id twice means the parent links form
    /// a loop, reported as `CyclicStructure`.
    #[instrument(level = "debug", skip(self))]
    pub fn sequence(&self, root_parent_id: CategoryId) -> DomainResult<Sequence<'a, T>> {
        let mut records = Vec::with_capacity(self.index.len());
        let mut visited = HashSet::with_capacity(self.index.len());
        let mut stack: Vec<(CategoryId, usize)> = vec![(root_parent_id, 0)];

        while let Some(frame) = stack.last_mut() {
            let (parent_id, position) = *frame;
            match self.index.children(parent_id).get(position) {
                None => {
                    stack.pop();
                }
                Some(&child) => {
                    frame.1 += 1;
                    let id = child.id();
                    if !visited.insert(id) {
                        return Err(DomainError::CyclicStructure(id));
                    }
                    trace!("emit {} (parent {}, depth {})", id, parent_id, stack.len());
                    records.push(child);
                    stack.push((id, 0));
                }
            }
        }

        Ok(Sequence { records, visited })
    }
}
