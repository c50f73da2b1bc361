//! Parent index: direct children per parent id, in input order.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::domain::entities::{CategoryId, CategoryNode};
use crate::domain::error::{DomainError, DomainResult};

/// Maps each parent id to its direct children, preserving first-seen order
/// within every bucket. Borrows the records; built once per invocation.
#[derive(Debug)]
pub struct ParentIndex<'a, T> {
    buckets: HashMap<CategoryId, Vec<&'a T>>,
    len: usize,
}

impl<'a, T: CategoryNode> ParentIndex<'a, T> {
    /// Build the index in a single pass.
    ///
    /// Fails with `InvalidArgument` if an id occurs more than once, since the
    /// traversal relies on ids being unique.
    #[instrument(level = "debug", skip_all, fields(records = records.len()))]
    pub fn build(records: &'a [T]) -> DomainResult<Self> {
        let mut buckets: HashMap<CategoryId, Vec<&'a T>> = HashMap::new();
        let mut seen: HashSet<CategoryId> = HashSet::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.id()) {
                return Err(DomainError::invalid_argument(format!(
                    "duplicate category id {}",
                    record.id()
                )));
            }
            buckets.entry(record.parent_id()).or_default().push(record);
        }

        debug!("indexed {} records under {} parents", records.len(), buckets.len());
        Ok(Self {
            buckets,
            len: records.len(),
        })
    }

    /// Direct children of `parent_id`; empty for leaves and unknown ids.
    pub fn children(&self, parent_id: CategoryId) -> &[&'a T] {
        self.buckets
            .get(&parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
