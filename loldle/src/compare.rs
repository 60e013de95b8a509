//! Guess comparison rules.

use std::collections::HashSet;

use crate::model::{Champion, Evaluation, MatchStatus, YearStatus};

/// Compares a guessed champion against the target, field by field.
///
/// Overall correctness is decided by exact (case-sensitive) display name equality and is
/// independent of the per-field statuses.
pub fn evaluate<'a>(guess: &'a Champion, target: &'a Champion) -> Evaluation<'a> {
    Evaluation {
        guess,
        target,
        is_correct: guess.name == target.name,
        gender: compare_single(&guess.gender, &target.gender),
        positions: compare_multi(&guess.positions, &target.positions),
        species: compare_multi(&guess.species, &target.species),
        resource: compare_single(&guess.resource, &target.resource),
        range_type: compare_multi(&guess.range_type, &target.range_type),
        regions: compare_multi(&guess.regions, &target.regions),
        release_year: compare_release_year(guess.release_year, target.release_year),
    }
}

/// Case-insensitive equality of two categorical values. Scalars never match partially.
pub fn compare_single(guess: &str, target: &str) -> MatchStatus {
    if guess.to_lowercase() == target.to_lowercase() {
        MatchStatus::Match
    } else {
        MatchStatus::Mismatch
    }
}

/// Compares two list fields as case-insensitive sets.
///
/// # Returns
/// - `MatchStatus::Match` - Sets are equal (including both empty)
/// - `MatchStatus::Partial` - Sets differ but share at least one value
/// - `MatchStatus::Mismatch` - Sets share nothing
pub fn compare_multi(guess: &[String], target: &[String]) -> MatchStatus {
    let guess = to_normalized_set(guess);
    let target = to_normalized_set(target);

    if guess == target {
        MatchStatus::Match
    } else if !guess.is_disjoint(&target) {
        MatchStatus::Partial
    } else {
        MatchStatus::Mismatch
    }
}

/// Tells the player which direction the target's release year lies in.
///
/// The unknown-year sentinel `0` is compared like any other year.
pub fn compare_release_year(guess: i32, target: i32) -> YearStatus {
    match guess.cmp(&target) {
        std::cmp::Ordering::Equal => YearStatus::Match,
        std::cmp::Ordering::Less => YearStatus::Higher,
        std::cmp::Ordering::Greater => YearStatus::Lower,
    }
}

fn to_normalized_set(values: &[String]) -> HashSet<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    /// Tests scalar comparison.
    ///
    /// Expected: Match regardless of case, Mismatch for different values
    #[test]
    fn test_scalar_comparison_ignores_case() {
        assert_eq!(compare_single("Mana", "mana"), MatchStatus::Match);
        assert_eq!(compare_single("Mana", "Energy"), MatchStatus::Mismatch);
    }

    /// Tests set comparison with repeated values.
    ///
    /// Verifies that duplicates differing only by case collapse into one set member.
    ///
    /// Expected: Match
    #[test]
    fn test_duplicates_do_not_break_set_equality() {
        assert_eq!(
            compare_multi(&set(&["Top", "top"]), &set(&["TOP"])),
            MatchStatus::Match
        );
    }

    /// Tests a guess holding every target value plus more.
    ///
    /// Expected: Partial
    #[test]
    fn test_superset_guess_is_partial() {
        assert_eq!(
            compare_multi(&set(&["Top", "Jungle"]), &set(&["Top"])),
            MatchStatus::Partial
        );
    }

    /// Tests an empty list against a non-empty one.
    ///
    /// Expected: Mismatch
    #[test]
    fn test_empty_guess_against_values_is_mismatch() {
        assert_eq!(compare_multi(&set(&[]), &set(&["Void"])), MatchStatus::Mismatch);
    }

    /// Tests the unknown-year sentinel in year comparison.
    ///
    /// Expected: 0 compares like any other year
    #[test]
    fn test_unknown_year_sorts_as_zero() {
        assert_eq!(compare_release_year(0, 2012), YearStatus::Higher);
        assert_eq!(compare_release_year(2012, 0), YearStatus::Lower);
        assert_eq!(compare_release_year(0, 0), YearStatus::Match);
    }
}
