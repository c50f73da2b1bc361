//! Flat-to-tree ordering entry point.

use tracing::{debug, instrument};

use crate::domain::entities::{CategoryId, CategoryNode, TOP_LEVEL};
use crate::domain::error::DomainResult;
use crate::domain::index::ParentIndex;
use crate::domain::orphans::{OrphanAppender, OrphanPolicy};
use crate::domain::sequencer::TreeSequencer;

/// Options for [`sort_for_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    /// Parent id whose children start the traversal
    pub root_parent_id: CategoryId,
    /// Drop records whose parent is not part of the input
    pub ignore_categories_without_existing_parent: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            root_parent_id: TOP_LEVEL,
            ignore_categories_without_existing_parent: false,
        }
    }
}

impl SortOptions {
    pub fn root(mut self, root_parent_id: CategoryId) -> Self {
        self.root_parent_id = root_parent_id;
        self
    }

    pub fn ignore_orphans(mut self, ignore: bool) -> Self {
        self.ignore_categories_without_existing_parent = ignore;
        self
    }

    pub fn orphan_policy(&self) -> OrphanPolicy {
        OrphanPolicy::from_ignore_flag(self.ignore_categories_without_existing_parent)
    }
}

/// Result of [`sort_tree_order`]: the ordered records plus the ids the
/// traversal never reached.
#[derive(Debug)]
pub struct TreeOrder<'a, T> {
    /// Tree order; unreached records are appended or dropped per the options
    pub records: Vec<&'a T>,
    /// Ids of unreached records, in input order, whether kept or dropped
    pub unreached: Vec<CategoryId>,
}

impl<T> TreeOrder<'_, T> {
    /// Number of unreached records left out of `records`.
    pub fn dropped(&self, total: usize) -> usize {
        total - self.records.len()
    }
}

/// Reorder a flat, parent-referencing record list into tree order.
///
/// Every record appears after its ancestors; siblings keep their input order.
/// Records the walk from the root never reaches (parent missing from the
/// input, or outside the root's subtree) are appended at the end (input
/// order) or dropped, depending on the options.
///
/// Parent loops among unreached records fail as well, with either orphan
/// option, even though the walk never visits them.
///
/// # Errors
/// * `InvalidArgument` if an id occurs more than once
/// * `CyclicStructure` if parent links form a loop
///
/// # Example
/// ```
/// use cattree::domain::{sort_for_tree, Category, CategoryNode, SortOptions};
///
/// let records = vec![
///     Category::new(1, 0, "Apparel"),
///     Category::new(2, 1, "Shoes"),
///     Category::new(3, 1, "Shirts"),
///     Category::new(4, 2, "Boots"),
///     Category::new(5, 99, "Lost"),
/// ];
/// let sorted = sort_for_tree(&records, SortOptions::default()).unwrap();
/// let ids: Vec<i64> = sorted.iter().map(|c| c.id()).collect();
/// assert_eq!(ids, vec![1, 2, 4, 3, 5]);
/// ```
pub fn sort_for_tree<T: CategoryNode>(records: &[T], options: SortOptions) -> DomainResult<Vec<&T>> {
    Ok(sort_tree_order(records, options)?.records)
}

/// [`sort_for_tree`], also reporting which records the walk did not reach.
#[instrument(level = "debug", skip(records), fields(records = records.len()))]
pub fn sort_tree_order<T: CategoryNode>(
    records: &[T],
    options: SortOptions,
) -> DomainResult<TreeOrder<'_, T>> {
    let index = ParentIndex::build(records)?;
    let sequence = TreeSequencer::new(&index).sequence(options.root_parent_id)?;
    debug!("reached {} of {} records", sequence.len(), records.len());
    let unreached = records
        .iter()
        .map(|r| r.id())
        .filter(|&id| !sequence.contains(id))
        .collect();
    let records = OrphanAppender::reconcile(records, sequence, options.orphan_policy())?;
    Ok(TreeOrder { records, unreached })
}
