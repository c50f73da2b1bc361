//! In-memory tree lookup backed by a [`CategoryTree`].

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::{
    CategoryId, CategoryNode, CategoryTree, DomainResult, LanguageId, LocalizedCategory, NodeRef,
    SortOptions,
};
use crate::infrastructure::traits::CategoryLookup;

/// Placeholder replaced by the alias inside an alias pattern.
pub const ALIAS_PLACEHOLDER: &str = "{alias}";

/// Lookup over a tree built once from flat records.
#[derive(Debug)]
pub struct InMemoryCategoryLookup<T> {
    tree: CategoryTree<T>,
}

impl<T> InMemoryCategoryLookup<T> {
    pub fn new(tree: CategoryTree<T>) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &CategoryTree<T> {
        &self.tree
    }
}

impl<T: CategoryNode + Clone> InMemoryCategoryLookup<T> {
    /// Build the backing tree with orphans kept as top-level nodes.
    pub fn from_records(records: &[T]) -> DomainResult<Self> {
        let tree = CategoryTree::from_records(records, SortOptions::default())?;
        Ok(Self::new(tree))
    }
}

impl<T> CategoryLookup for InMemoryCategoryLookup<T>
where
    T: LocalizedCategory + Send + Sync,
{
    type Category = T;

    fn resolve_with_ancestors(&self, id: CategoryId) -> Option<NodeRef<'_, T>> {
        self.tree.find(id)
    }

    #[instrument(level = "debug", skip(self, node), fields(id = node.value().id()))]
    fn compose_breadcrumb(
        &self,
        node: NodeRef<'_, T>,
        language_id: Option<LanguageId>,
        alias_pattern: Option<&str>,
        separator: &str,
    ) -> String {
        let path = node.path_from_root();
        debug!("breadcrumb over {} nodes", path.len());
        path.iter()
            .map(|n| breadcrumb_label(n.value(), language_id, alias_pattern))
            .join(separator)
    }
}

/// Display name, followed by the alias pattern (with the alias substituted)
/// when both the pattern and the alias are non-empty.
fn breadcrumb_label<T: LocalizedCategory>(
    category: &T,
    language_id: Option<LanguageId>,
    alias_pattern: Option<&str>,
) -> String {
    let name = category.display_name(language_id);
    let alias = category.alias().filter(|a| !a.is_empty());
    match (alias_pattern.filter(|p| !p.is_empty()), alias) {
        (Some(pattern), Some(alias)) => {
            format!("{} {}", name, pattern.replace(ALIAS_PLACEHOLDER, alias))
        }
        _ => name.to_string(),
    }
}
