//! Breadcrumb paths for single categories.

use tracing::debug;

use crate::domain::{CategoryNode, LanguageId};
use crate::infrastructure::traits::CategoryLookup;

pub const DEFAULT_SEPARATOR: &str = " » ";

/// Options forwarded to [`CategoryLookup::compose_breadcrumb`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOptions {
    pub language_id: Option<LanguageId>,
    /// Opaque to the composer; interpreted by the lookup
    pub alias_pattern: Option<String>,
    pub separator: String,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            language_id: None,
            alias_pattern: None,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Resolves a record through a lookup and hands breadcrumb assembly back to it.
pub struct PathComposer<'l, L: ?Sized> {
    lookup: &'l L,
}

impl<'l, L: CategoryLookup + ?Sized> PathComposer<'l, L> {
    pub fn new(lookup: &'l L) -> Self {
        Self { lookup }
    }

    /// Breadcrumb for `record`, or an empty string if the lookup does not
    /// know its id.
    pub fn compose<R: CategoryNode + ?Sized>(&self, record: &R, options: &PathOptions) -> String {
        match self.lookup.resolve_with_ancestors(record.id()) {
            Some(node) => self.lookup.compose_breadcrumb(
                node,
                options.language_id,
                options.alias_pattern.as_deref(),
                &options.separator,
            ),
            None => {
                debug!("no tree node for category {}", record.id());
                String::new()
            }
        }
    }
}
