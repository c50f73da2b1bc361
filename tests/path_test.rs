use rstest::{fixture, rstest};

use cattree::application::{PathComposer, PathOptions};
use cattree::domain::Category;
use cattree::infrastructure::traits::CategoryLookup;
use cattree::infrastructure::InMemoryCategoryLookup;

#[fixture]
fn shop() -> Vec<Category> {
    vec![
        Category::new(1, 0, "Apparel").with_alias("clothes").with_localized(2, "Bekleidung"),
        Category::new(2, 1, "Shoes").with_alias("footwear").with_localized(2, "Schuhe"),
        Category::new(3, 1, "Shirts"),
        Category::new(4, 2, "Boots"),
        Category::new(5, 99, "Clearance"),
    ]
}

#[rstest]
fn given_nested_record_when_composing_then_root_first_with_default_separator(shop: Vec<Category>) {
    let lookup = InMemoryCategoryLookup::from_records(&shop).unwrap();

    let path = PathComposer::new(&lookup).compose(&shop[3], &PathOptions::default());

    assert_eq!(path, "Apparel » Shoes » Boots");
}

#[rstest]
#[case::plain(None, None, " / ", "Apparel / Shoes")]
#[case::localized(Some(2), None, " / ", "Bekleidung / Schuhe")]
#[case::unknown_language(Some(9), None, ">", "Apparel>Shoes")]
#[case::alias_pattern(None, Some("({alias})"), " > ", "Apparel (clothes) > Shoes (footwear)")]
#[case::empty_pattern(None, Some(""), " > ", "Apparel > Shoes")]
fn given_options_when_composing_then_forwarded_to_lookup(
    shop: Vec<Category>,
    #[case] language_id: Option<i32>,
    #[case] alias_pattern: Option<&str>,
    #[case] separator: &str,
    #[case] expected: &str,
) {
    let lookup = InMemoryCategoryLookup::from_records(&shop).unwrap();
    let options = PathOptions {
        language_id,
        alias_pattern: alias_pattern.map(str::to_string),
        separator: separator.to_string(),
    };

    let path = PathComposer::new(&lookup).compose(&shop[1], &options);

    assert_eq!(path, expected);
}

#[rstest]
fn given_orphan_when_composing_then_path_starts_at_orphan(shop: Vec<Category>) {
    let lookup = InMemoryCategoryLookup::from_records(&shop).unwrap();

    let path = PathComposer::new(&lookup).compose(&shop[4], &PathOptions::default());

    assert_eq!(path, "Clearance");
}

#[rstest]
fn given_record_unknown_to_lookup_when_composing_then_empty(shop: Vec<Category>) {
    let lookup = InMemoryCategoryLookup::from_records(&shop).unwrap();
    let stranger = Category::new(42, 1, "Hats");

    let path = PathComposer::new(&lookup).compose(&stranger, &PathOptions::default());

    assert_eq!(path, "");
}

#[rstest]
fn given_trait_object_lookup_when_composing_then_same_result(shop: Vec<Category>) {
    let lookup: Box<dyn CategoryLookup<Category = Category>> =
        Box::new(InMemoryCategoryLookup::from_records(&shop).unwrap());

    let composer = PathComposer::new(lookup.as_ref());

    assert_eq!(
        composer.compose(&shop[2], &PathOptions::default()),
        "Apparel » Shirts"
    );
}
