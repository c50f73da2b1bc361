//! Tests for CategoryTree and indented labels

use rstest::rstest;

use cattree::domain::{
    format_label, Category, CategoryTree, DomainError, LabelFormatter, LabelOptions, SortOptions,
};

fn shop() -> Vec<Category> {
    vec![
        Category::new(1, 0, "Apparel").with_alias("clothes").with_localized(2, "Bekleidung"),
        Category::new(2, 1, "Shoes").with_alias("footwear").with_localized(2, "Schuhe"),
        Category::new(3, 1, "Shirts"),
        Category::new(4, 2, "Boots"),
        Category::new(5, 99, "Clearance"),
    ]
}

#[test]
fn given_node_at_depth_three_when_formatting_then_matches_example() {
    let mut tree = CategoryTree::new();
    let root = tree.insert_node(Category::new(1, 0, "Apparel"), None).unwrap();
    let mid = tree.insert_node(Category::new(2, 1, "Clothing"), Some(root)).unwrap();
    let leaf = tree
        .insert_node(Category::new(3, 2, "Shoes").with_alias("footwear"), Some(mid))
        .unwrap();

    let label = tree.label(leaf, &LabelOptions::default()).unwrap();

    assert_eq!(tree.node(leaf).unwrap().depth(), 3);
    assert_eq!(label, "----Shoes (footwear)");
}

#[test]
fn given_shop_when_rendering_labels_then_pre_order_with_indentation() {
    let tree = CategoryTree::from_records(&shop(), SortOptions::default()).unwrap();

    let labels = tree.indented_labels(&LabelOptions::default());

    assert_eq!(
        labels,
        vec![
            "Apparel (clothes)",
            "--Shoes (footwear)",
            "----Boots",
            "--Shirts",
            "Clearance",
        ]
    );
}

#[test]
fn given_shop_ignoring_orphans_when_rendering_then_orphan_missing() {
    let tree =
        CategoryTree::from_records(&shop(), SortOptions::default().ignore_orphans(true)).unwrap();

    let labels = tree.indented_labels(&LabelOptions {
        with_alias: false,
        ..Default::default()
    });

    assert_eq!(labels, vec!["Apparel", "--Shoes", "----Boots", "--Shirts"]);
}

#[rstest]
#[case(None, "..Shoes (footwear)")]
#[case(Some(2), "..Schuhe (footwear)")]
#[case(Some(7), "..Shoes (footwear)")]
fn given_language_when_formatting_then_localized_or_plain(
    #[case] language_id: Option<i32>,
    #[case] expected: &str,
) {
    let tree = CategoryTree::from_records(&shop(), SortOptions::default()).unwrap();
    let shoes = tree.find(2).unwrap();
    let options = LabelOptions {
        indent_prefix: ".".to_string(),
        language_id,
        with_alias: true,
    };

    assert_eq!(LabelFormatter::format(shoes, &options), expected);
}

#[test]
fn given_same_arguments_when_formatting_twice_then_identical() {
    let tree = CategoryTree::from_records(&shop(), SortOptions::default()).unwrap();
    let boots = tree.find(4).unwrap();
    let options = LabelOptions::default();

    assert_eq!(
        LabelFormatter::format(boots, &options),
        LabelFormatter::format(boots, &options)
    );
    assert_eq!(
        format_label(boots.value(), boots.depth(), "--", None, true),
        "----Boots"
    );
}

#[test]
fn given_subtree_root_when_building_then_children_are_top_level() {
    let tree = CategoryTree::from_records(
        &shop(),
        SortOptions::default().root(1).ignore_orphans(true),
    )
    .unwrap();

    let labels = tree.indented_labels(&LabelOptions {
        with_alias: false,
        ..Default::default()
    });

    assert_eq!(labels, vec!["Shoes", "--Boots", "Shirts"]);
}

#[test]
fn given_cycle_when_building_tree_then_error() {
    let records = vec![Category::new(1, 2, "a"), Category::new(2, 1, "b")];

    let result = CategoryTree::from_records(&records, SortOptions::default());

    assert!(matches!(result, Err(DomainError::CyclicStructure(_))));
}
