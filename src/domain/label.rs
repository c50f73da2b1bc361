//! Indented display labels for tree nodes.

use crate::domain::arena::NodeRef;
use crate::domain::entities::{LanguageId, LocalizedCategory};

pub const DEFAULT_INDENT_PREFIX: &str = "--";

/// Options for [`LabelFormatter::format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOptions {
    /// Repeated once per level below the top
    pub indent_prefix: String,
    /// Language for localized names; None uses the plain name
    pub language_id: Option<LanguageId>,
    /// Append `" (alias)"` when the category has a non-empty alias
    pub with_alias: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            indent_prefix: DEFAULT_INDENT_PREFIX.to_string(),
            language_id: None,
            with_alias: true,
        }
    }
}

pub struct LabelFormatter;

impl LabelFormatter {
    /// `indent_prefix` repeated `depth - 1` times, the display name, and the
    /// alias in parentheses if requested.
    pub fn format<T: LocalizedCategory>(node: NodeRef<'_, T>, options: &LabelOptions) -> String {
        format_label(
            node.value(),
            node.depth(),
            &options.indent_prefix,
            options.language_id,
            options.with_alias,
        )
    }
}

pub fn format_label<T: LocalizedCategory + ?Sized>(
    category: &T,
    depth: usize,
    indent_prefix: &str,
    language_id: Option<LanguageId>,
    with_alias: bool,
) -> String {
    let mut label = indent_prefix.repeat(depth.saturating_sub(1));
    label.push_str(category.display_name(language_id));
    if with_alias {
        if let Some(alias) = category.alias().filter(|a| !a.is_empty()) {
            label.push_str(" (");
            label.push_str(alias);
            label.push(')');
        }
    }
    label
}
