//! Reconciles a traversal with the full input: orphan records are appended
//! or dropped.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::domain::entities::{CategoryId, CategoryNode};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::sequencer::Sequence;

/// What to do with records the traversal never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Append unreached records after the tree, in input order
    #[default]
    Append,
    /// Drop unreached records
    Discard,
}

impl OrphanPolicy {
    pub fn from_ignore_flag(ignore_categories_without_existing_parent: bool) -> Self {
        if ignore_categories_without_existing_parent {
            Self::Discard
        } else {
            Self::Append
        }
    }
}

pub struct OrphanAppender;

impl OrphanAppender {
    /// Finish a sequence according to `policy`.
    ///
    /// Unreached records are first checked for parent loops among
    /// themselves; such records are malformed input, not orphans.
    #[instrument(level = "debug", skip(records, sequence), fields(records = records.len(), emitted = sequence.len()))]
    pub fn reconcile<'a, T: CategoryNode>(
        records: &'a [T],
        sequence: Sequence<'a, T>,
        policy: OrphanPolicy,
    ) -> DomainResult<Vec<&'a T>> {
        let Sequence {
            records: mut result,
            visited,
        } = sequence;

        if result.len() >= records.len() {
            return Ok(result);
        }

        check_unreached_cycles(records, &visited)?;

        if policy == OrphanPolicy::Discard {
            debug!("discarding {} orphans", records.len() - result.len());
            return Ok(result);
        }

        let before = result.len();
        result.extend(records.iter().filter(|r| !visited.contains(&r.id())));
        debug!("appended {} orphans", result.len() - before);
        Ok(result)
    }
}

/// Follow the parent chain of every unreached record. A chain that returns
/// to a record already on it is a loop.
fn check_unreached_cycles<T: CategoryNode>(
    records: &[T],
    visited: &HashSet<CategoryId>,
) -> DomainResult<()> {
    let parents: HashMap<CategoryId, CategoryId> = records
        .iter()
        .filter(|r| !visited.contains(&r.id()))
        .map(|r| (r.id(), r.parent_id()))
        .collect();
    let mut cleared: HashSet<CategoryId> = HashSet::with_capacity(parents.len());

    for &start in parents.keys() {
        let mut chain: HashSet<CategoryId> = HashSet::new();
        let mut current = start;
        while let Some(&parent) = parents.get(&current) {
            if cleared.contains(&current) {
                break;
            }
            if !chain.insert(current) {
                return Err(DomainError::CyclicStructure(current));
            }
            current = parent;
        }
        cleared.extend(chain);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Category;
    use crate::domain::index::ParentIndex;
    use crate::domain::sequencer::TreeSequencer;

    fn reconcile_ids(records: &[Category], policy: OrphanPolicy) -> DomainResult<Vec<CategoryId>> {
        let index = ParentIndex::build(records)?;
        let sequence = TreeSequencer::new(&index).sequence(0)?;
        let result = OrphanAppender::reconcile(records, sequence, policy)?;
        Ok(result.iter().map(|r| r.id()).collect())
    }

    #[test]
    fn given_orphans_when_appending_then_in_input_order_after_tree() {
        let records = vec![
            Category::new(7, 70, "orphan-a"),
            Category::new(1, 0, "root"),
            Category::new(8, 80, "orphan-b"),
            Category::new(2, 1, "child"),
        ];

        let ids = reconcile_ids(&records, OrphanPolicy::Append).unwrap();

        assert_eq!(ids, vec![1, 2, 7, 8]);
    }

    #[test]
    fn given_orphans_when_discarding_then_dropped() {
        let records = vec![
            Category::new(7, 70, "orphan-a"),
            Category::new(1, 0, "root"),
        ];

        let ids = reconcile_ids(&records, OrphanPolicy::Discard).unwrap();

        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn given_orphan_subtree_when_appending_then_keeps_input_order() {
        // the orphan's child is unreached too and keeps its input position
        let records = vec![
            Category::new(11, 10, "orphan-child"),
            Category::new(10, 99, "orphan"),
            Category::new(1, 0, "root"),
        ];

        let ids = reconcile_ids(&records, OrphanPolicy::Append).unwrap();

        assert_eq!(ids, vec![1, 11, 10]);
    }

    #[test]
    fn given_unreachable_loop_when_reconciling_then_cycle_error() {
        let records = vec![
            Category::new(1, 0, "root"),
            Category::new(2, 3, "a"),
            Category::new(3, 2, "b"),
        ];

        for policy in [OrphanPolicy::Append, OrphanPolicy::Discard] {
            let result = reconcile_ids(&records, policy);
            assert!(matches!(result, Err(DomainError::CyclicStructure(_))));
        }
    }

    #[test]
    fn given_ignore_flag_when_mapping_then_policy() {
        assert_eq!(OrphanPolicy::from_ignore_flag(true), OrphanPolicy::Discard);
        assert_eq!(OrphanPolicy::from_ignore_flag(false), OrphanPolicy::Append);
    }
}
