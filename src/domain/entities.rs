//! Domain entities: category records and the capabilities the algorithms need

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a category record.
pub type CategoryId = i64;

/// Identifier of a language used for localized names.
pub type LanguageId = i32;

/// Parent id marking a top-level record.
pub const TOP_LEVEL: CategoryId = 0;

/// Minimal capability required for tree ordering: identity and parent linkage.
pub trait CategoryNode {
    fn id(&self) -> CategoryId;
    fn parent_id(&self) -> CategoryId;
}

impl<T: CategoryNode + ?Sized> CategoryNode for &T {
    fn id(&self) -> CategoryId {
        (**self).id()
    }

    fn parent_id(&self) -> CategoryId {
        (**self).parent_id()
    }
}

/// Capability required by the presentation helpers (labels, breadcrumbs).
///
/// How localized names are stored or resolved is up to the implementor;
/// `localized_name` returns `None` when nothing is available for a language.
pub trait LocalizedCategory: CategoryNode {
    fn name(&self) -> &str;

    fn alias(&self) -> Option<&str>;

    fn localized_name(&self, language_id: LanguageId) -> Option<&str>;

    /// Name to display: the localized name when a language is given and
    /// one exists, otherwise the plain name.
    fn display_name(&self, language_id: Option<LanguageId>) -> &str {
        language_id
            .and_then(|lang| self.localized_name(lang))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.name())
    }
}

/// Localized name of a category for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub language_id: LanguageId,
    pub name: String,
}

/// Concrete category record as loaded from category files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Parent category id, `0` for top-level categories
    #[serde(default)]
    pub parent_id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub localized: Vec<LocalizedName>,
}

impl Category {
    pub fn new(id: CategoryId, parent_id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            parent_id,
            name: name.into(),
            alias: None,
            localized: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_localized(mut self, language_id: LanguageId, name: impl Into<String>) -> Self {
        self.localized.push(LocalizedName {
            language_id,
            name: name.into(),
        });
        self
    }
}

impl CategoryNode for Category {
    fn id(&self) -> CategoryId {
        self.id
    }

    fn parent_id(&self) -> CategoryId {
        self.parent_id
    }
}

impl LocalizedCategory for Category {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    fn localized_name(&self, language_id: LanguageId) -> Option<&str> {
        self.localized
            .iter()
            .find(|l| l.language_id == language_id)
            .map(|l| l.name.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_language_with_localization_when_display_name_then_uses_localized() {
        let category = Category::new(1, 0, "Shoes").with_localized(2, "Schuhe");
        assert_eq!(category.display_name(Some(2)), "Schuhe");
    }

    #[test]
    fn given_language_without_localization_when_display_name_then_falls_back() {
        let category = Category::new(1, 0, "Shoes").with_localized(2, "Schuhe");
        assert_eq!(category.display_name(Some(3)), "Shoes");
        assert_eq!(category.display_name(None), "Shoes");
    }

    #[test]
    fn given_reference_when_reading_node_then_delegates() {
        let category = Category::new(7, 3, "Boots");
        let by_ref = &category;
        assert_eq!(CategoryNode::id(&by_ref), 7);
        assert_eq!(CategoryNode::parent_id(&by_ref), 3);
    }
}
