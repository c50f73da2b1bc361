//! Boundary traits for testability
//!
//! These traits abstract file access and the external tree-lookup
//! capability, allowing services to be tested with mock implementations.

use std::io;
use std::path::Path;

use crate::domain::{CategoryId, LanguageId, LocalizedCategory, NodeRef};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Tree-lookup capability: resolves a single category into its tree
/// position and assembles breadcrumbs.
///
/// Implementations decide how trees are stored or cached; callers only rely
/// on this contract.
pub trait CategoryLookup: Send + Sync {
    type Category: LocalizedCategory;

    /// Resolve `id` to a node whose ancestors are reachable through
    /// [`NodeRef::parent`]. None if the id is unknown.
    fn resolve_with_ancestors(&self, id: CategoryId) -> Option<NodeRef<'_, Self::Category>>;

    /// Separator-joined labels from the top-level ancestor down to `node`.
    fn compose_breadcrumb(
        &self,
        node: NodeRef<'_, Self::Category>,
        language_id: Option<LanguageId>,
        alias_pattern: Option<&str>,
        separator: &str,
    ) -> String;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
