//! Champion of the day selection.
//!
//! The daily target is a pure function of the UTC calendar date and the catalog: the date
//! is shifted forward by [`DAILY_OFFSET_DAYS`], rendered as `YYYY-MM-DD`, hashed with a
//! base-31 rolling hash modulo 2^32, and reduced modulo the catalog size. Changing any of
//! these steps changes which champion players get for a given day.

use chrono::{Days, NaiveDate};

use crate::{catalog::Catalog, model::Champion};

/// Fixed shift applied to the calendar date before hashing.
pub const DAILY_OFFSET_DAYS: u64 = 3;

/// Rolling hash over the characters of `key`: `hash = hash * 31 + code`, wrapping at 2^32.
pub fn daily_hash(key: &str) -> u32 {
    key.chars()
        .fold(0u32, |hash, c| hash.wrapping_mul(31).wrapping_add(c as u32))
}

/// The string hashed for `date`: the shifted date in ISO `YYYY-MM-DD` form.
pub fn daily_key(date: NaiveDate) -> String {
    date.checked_add_days(Days::new(DAILY_OFFSET_DAYS))
        .unwrap_or(NaiveDate::MAX)
        .format("%Y-%m-%d")
        .to_string()
}

/// Catalog position of the champion of the day.
///
/// # Arguments
/// - `date` - UTC calendar date
/// - `len` - Catalog size, must be greater than zero
///
/// # Returns
/// - `usize` - Position in `0..len`
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    daily_hash(&daily_key(date)) as usize % len
}

impl Catalog {
    /// Champion of the day for the given UTC calendar date.
    ///
    /// Callers resolve "today" at the boundary (typically `Utc::now().date_naive()`) so the
    /// selection stays pure and reproducible.
    pub fn daily_target(&self, date: NaiveDate) -> &Champion {
        &self.champions()[daily_index(date, self.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    /// Tests the hashed date key.
    ///
    /// Verifies the three-day shift across a year end and a leap day.
    ///
    /// Expected: Shifted ISO date
    #[test]
    fn test_key_is_shifted_three_days() {
        assert_eq!(daily_key(date("2024-01-01")), "2024-01-04");
        assert_eq!(daily_key(date("2025-12-31")), "2026-01-03");
        assert_eq!(daily_key(date("2024-02-27")), "2024-03-01");
    }

    /// Tests the rolling hash against known values.
    ///
    /// Expected: Same values as a 32-bit base-31 string hash
    #[test]
    fn test_hash_matches_known_values() {
        assert_eq!(daily_hash(""), 0);
        assert_eq!(daily_hash("a"), 97);
        assert_eq!(daily_hash("ab"), 97 * 31 + 98);
        assert_eq!(daily_hash("2024-01-04"), 3_681_625_667);
        assert_eq!(daily_hash("2026-01-03"), 1_161_665_732);
    }

    /// Tests daily index selection for known dates.
    ///
    /// Expected: Pinned indices for catalogs of 4 and 69 champions
    #[test]
    fn test_index_is_hash_modulo_len() {
        assert_eq!(daily_index(date("2024-01-01"), 4), 3);
        assert_eq!(daily_index(date("2024-06-15"), 4), 1);
        assert_eq!(daily_index(date("2025-12-31"), 69), 17);
        assert_eq!(daily_index(date("2026-10-19"), 69), 51);
    }

    /// Tests that daily indices stay in range.
    ///
    /// Expected: Index below catalog size for 1000 consecutive days
    #[test]
    fn test_index_stays_in_bounds() {
        let mut day = date("2020-01-01");
        for _ in 0..1000 {
            assert!(daily_index(day, 7) < 7);
            day = day.succ_opt().unwrap();
        }
    }
}
