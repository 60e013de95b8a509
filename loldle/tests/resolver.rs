use loldle::{normalize_name, DEFAULT_SUGGESTION_LIMIT};
use test_utils::builder::CatalogBuilder;

/// Tests lookup ignoring case, spaces and punctuation.
///
/// Expected: every spelling resolves to the same champion
#[test]
fn test_resolves_regardless_of_case_and_punctuation() {
    let catalog = CatalogBuilder::new()
        .with_names(&["Kai'Sa", "Dr. Mundo"])
        .build()
        .unwrap();

    for input in ["Kai'Sa", "kaisa", "KAI SA", " k-a-i-s-a "] {
        assert_eq!(catalog.resolve(input).unwrap().name, "Kai'Sa");
    }
    assert_eq!(catalog.resolve("drmundo").unwrap().name, "Dr. Mundo");
}

/// Tests that an unknown name is a miss, not an error.
///
/// Expected: None
#[test]
fn test_unknown_name_is_not_found() {
    let catalog = CatalogBuilder::new().with_roster().build().unwrap();

    assert!(catalog.resolve("Teemo").is_none());
    assert!(catalog.resolve("").is_none());
}

/// Tests that resolving a resolved champion's name again yields the same champion.
///
/// Expected: Some(same champion)
#[test]
fn test_resolution_is_idempotent() {
    let catalog = CatalogBuilder::new().with_roster().build().unwrap();

    let first = catalog.resolve("  kAtArInA!").unwrap();
    let second = catalog.resolve(&normalize_name(&first.name)).unwrap();

    assert_eq!(first, second);
}

/// Tests that prefix matches are returned before contains matches are considered.
///
/// Expected: the three K names in catalog order, no Zyra
#[test]
fn test_suggests_prefix_matches_in_catalog_order() {
    let catalog = CatalogBuilder::new().with_roster().build().unwrap();

    assert_eq!(
        catalog.suggest("ka", DEFAULT_SUGGESTION_LIMIT),
        vec!["Kassadin", "Katarina", "Kayle"]
    );
}

/// Tests that a full page of prefix matches skips the contains search.
///
/// Expected: the first two prefix matches only
#[test]
fn test_truncates_prefix_matches_to_limit() {
    let catalog = CatalogBuilder::new()
        .with_roster()
        .with_names(&["Akali"])
        .build()
        .unwrap();

    assert_eq!(catalog.suggest("ka", 2), vec!["Kassadin", "Katarina"]);
}

/// Tests filling remaining slots with contains matches.
///
/// Expected: prefix match first, then contains matches, no duplicates
#[test]
fn test_fills_with_contains_matches() {
    let catalog = CatalogBuilder::new()
        .with_names(&["Ahri", "Shaco", "Sona", "Ashe", "Yasuo"])
        .build()
        .unwrap();

    assert_eq!(
        catalog.suggest("sh", DEFAULT_SUGGESTION_LIMIT),
        vec!["Shaco", "Ashe"]
    );
    assert_eq!(catalog.suggest("a", 3), vec!["Ahri", "Ashe", "Shaco"]);
}

/// Tests that a query without letters or digits yields nothing.
///
/// Expected: empty list for any limit
#[test]
fn test_empty_query_has_no_suggestions() {
    let catalog = CatalogBuilder::new().with_roster().build().unwrap();

    for limit in [0, 1, 5, 100] {
        assert!(catalog.suggest("", limit).is_empty());
        assert!(catalog.suggest(" '-. ", limit).is_empty());
    }
}

/// Tests a query matching nothing.
///
/// Expected: empty list
#[test]
fn test_unmatched_query_has_no_suggestions() {
    let catalog = CatalogBuilder::new().with_roster().build().unwrap();

    assert!(catalog.suggest("xyz", DEFAULT_SUGGESTION_LIMIT).is_empty());
}
