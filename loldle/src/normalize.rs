//! Name normalization and release date parsing.

/// Normalizes a champion name into its lookup key.
///
/// Lower-cases the input, then drops every character outside `[a-z0-9]`. Two names refer
/// to the same champion iff their normalized forms are equal, so `"Kai'Sa"`, `"kaisa"` and
/// `"KAI SA"` all resolve to the same entry.
///
/// # Arguments
/// - `value` - Free-text name as typed by a player or stored in the dataset
///
/// # Returns
/// - `String` - Lower-case ASCII alphanumeric key, possibly empty
pub fn normalize_name(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Extracts the release year from a dataset release date string.
///
/// Only the first four characters are considered. They are read as a leading integer
/// (optional surrounding whitespace and sign, then digits up to the first non-digit), so
/// `"2013-06-13"` yields `2013`. Absent or non-numeric input yields `0`, the sentinel for
/// an unknown year.
pub fn parse_release_year(value: Option<&str>) -> i32 {
    let Some(value) = value else {
        return 0;
    };

    let head: String = value.chars().take(4).collect();
    let head = head.trim_start();

    let (sign, digits) = match head.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, head.strip_prefix('+').unwrap_or(head)),
    };

    let digits: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();

    digits.parse::<i32>().map(|year| sign * year).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests name normalization on real champion names.
    ///
    /// Expected: Lower-case letters and digits only
    #[test]
    fn test_strips_case_and_punctuation() {
        assert_eq!(normalize_name("Kai'Sa"), "kaisa");
        assert_eq!(normalize_name("Nunu & Willump"), "nunuwillump");
        assert_eq!(normalize_name("Dr. Mundo"), "drmundo");
        assert_eq!(normalize_name("Jarvan IV"), "jarvaniv");
    }

    /// Tests normalization of input without letters or digits.
    ///
    /// Expected: Empty key
    #[test]
    fn test_normalizes_to_empty_for_symbols_only() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("  '.&- "), "");
    }

    /// Tests normalization of non-ASCII letters.
    ///
    /// Expected: Non-ASCII letters removed
    #[test]
    fn test_drops_non_ascii_letters() {
        assert_eq!(normalize_name("Zoë"), "zo");
    }

    /// Tests release year parsing from well-formed dates.
    ///
    /// Expected: Leading four digits
    #[test]
    fn test_parses_year_from_iso_date() {
        assert_eq!(parse_release_year(Some("2013-06-13")), 2013);
        assert_eq!(parse_release_year(Some("2009")), 2009);
    }

    /// Tests release year parsing for missing or non-numeric dates.
    ///
    /// Expected: 0
    #[test]
    fn test_unknown_year_defaults_to_zero() {
        assert_eq!(parse_release_year(None), 0);
        assert_eq!(parse_release_year(Some("")), 0);
        assert_eq!(parse_release_year(Some("soon")), 0);
        assert_eq!(parse_release_year(Some("TBA-2024")), 0);
    }

    /// Tests release year parsing of partially numeric prefixes.
    ///
    /// Expected: Digits before the first non-digit
    #[test]
    fn test_reads_leading_digits_only() {
        assert_eq!(parse_release_year(Some("20a4-01-01")), 20);
        assert_eq!(parse_release_year(Some(" 2014")), 201);
    }
}
