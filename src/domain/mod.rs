//! Domain layer: category records and the flat-to-tree algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod entities;
pub mod error;
pub mod index;
pub mod label;
pub mod orphans;
pub mod sequencer;
pub mod sort;

pub use arena::{CategoryTree, NodeRef, TreeIterator, TreeNode};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use index::ParentIndex;
pub use label::{format_label, LabelFormatter, LabelOptions, DEFAULT_INDENT_PREFIX};
pub use orphans::{OrphanAppender, OrphanPolicy};
pub use sequencer::{Sequence, TreeSequencer};
pub use sort::{sort_for_tree, sort_tree_order, SortOptions, TreeOrder};
