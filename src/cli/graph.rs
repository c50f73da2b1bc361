//! termtree rendering of category trees

use termtree::Tree;

use crate::domain::{format_label, CategoryTree, LabelOptions, LocalizedCategory, NodeRef};

pub trait TreeNodeConvert {
    fn to_tree_string(&self, options: &LabelOptions) -> Tree<String>;
}

impl<T: LocalizedCategory> TreeNodeConvert for NodeRef<'_, T> {
    fn to_tree_string(&self, options: &LabelOptions) -> Tree<String> {
        // lines replace indentation, so the label is rendered at depth 1
        let label = format_label(self.value(), 1, "", options.language_id, options.with_alias);

        let leaves: Vec<_> = self
            .children()
            .map(|c| c.to_tree_string(options))
            .collect();

        Tree::new(label).with_leaves(leaves)
    }
}

impl<T: LocalizedCategory> CategoryTree<T> {
    /// One termtree per top-level node.
    pub fn to_tree_strings(&self, options: &LabelOptions) -> Vec<Tree<String>> {
        self.roots()
            .iter()
            .filter_map(|&idx| self.node(idx))
            .map(|root| root.to_tree_string(options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, SortOptions};

    #[test]
    fn given_tree_when_rendering_then_children_nested() {
        let tree = CategoryTree::from_records(
            &[
                Category::new(1, 0, "Apparel"),
                Category::new(2, 1, "Shoes").with_alias("footwear"),
                Category::new(3, 1, "Shirts"),
            ],
            SortOptions::default(),
        )
        .unwrap();

        let rendered = tree.to_tree_strings(&LabelOptions::default());

        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].root, "Apparel");
        assert_eq!(rendered[0].leaves.len(), 2);
        assert_eq!(rendered[0].leaves[0].root, "Shoes (footwear)");
        let text = rendered[0].to_string();
        assert!(text.contains("Shirts"));
    }
}
