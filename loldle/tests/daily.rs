use chrono::{Days, NaiveDate};
use test_utils::builder::CatalogBuilder;

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

/// Tests that the same date always yields the same champion.
///
/// Expected: identical champion for repeated calls
#[test]
fn test_same_date_same_champion() {
    let catalog = CatalogBuilder::new().with_roster().build().unwrap();
    let day = date("2024-06-15");

    let first = catalog.daily_target(day);
    let second = catalog.daily_target(day);

    assert_eq!(first, second);
}

/// Tests the champion picked for known dates against the roster.
///
/// The roster sorts to Kassadin, Katarina, Kayle, Zyra.
///
/// Expected: index 3 (Zyra) for 2024-01-01, index 1 (Katarina) for 2024-06-15
#[test]
fn test_picks_known_champions() {
    let catalog = CatalogBuilder::new().with_roster().build().unwrap();

    assert_eq!(catalog.daily_target(date("2024-01-01")).name, "Zyra");
    assert_eq!(catalog.daily_target(date("2024-06-15")).name, "Katarina");
    assert_eq!(catalog.daily_target(date("2025-12-31")).name, "Kassadin");
}

/// Tests that any date maps into the catalog.
///
/// Expected: every target of a long run of days is a catalog member
#[test]
fn test_target_is_always_a_catalog_member() {
    let catalog = CatalogBuilder::new()
        .with_roster()
        .with_names(&["Ahri", "Teemo", "Vi"])
        .build()
        .unwrap();

    let mut day = date("2019-01-01");
    for _ in 0..2000 {
        let target = catalog.daily_target(day);
        assert!(catalog.champions().contains(target));
        day = day.checked_add_days(Days::new(1)).unwrap();
    }
}

/// Tests the edge of the calendar where the shift cannot be applied.
///
/// Expected: a catalog member, no panic
#[test]
fn test_handles_last_representable_date() {
    let catalog = CatalogBuilder::new().with_roster().build().unwrap();

    let target = catalog.daily_target(NaiveDate::MAX);
    assert!(catalog.champions().contains(target));
}

/// Tests that a single-champion catalog always yields that champion.
///
/// Expected: the only champion for any date
#[test]
fn test_single_champion_catalog() {
    let catalog = CatalogBuilder::new().with_names(&["Ahri"]).build().unwrap();

    assert_eq!(catalog.daily_target(date("2030-03-03")).name, "Ahri");
}
