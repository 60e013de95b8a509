//! Display-name ordering for the catalog.
//!
//! Champion names are ordered the way the root locale collator orders them rather than by
//! raw code points. Names are decomposed (NFD) and compared in three passes:
//!
//! 1. Base characters. Letters compare case- and accent-insensitively. Whitespace sorts
//!    before punctuation and symbols, those before digits, digits before letters.
//!    Punctuation and symbols follow the collator's own order (`_ - , ; : ! ? . '` ...),
//!    not code point order.
//! 2. Accents. An unaccented letter sorts before the same letter with marks.
//! 3. Case. Lower-case first.
//!
//! Code point order breaks any remaining tie so the ordering is total.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// ASCII punctuation and symbols in root collation order.
const SYMBOL_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Character classes in collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Symbol,
    Digit,
    Letter,
}

/// One base character with the combining marks that follow it.
struct CollationElement {
    primary: (CharClass, u32),
    marks: Vec<char>,
    upper: bool,
}

fn primary_weight(c: char) -> (CharClass, u32) {
    if c.is_whitespace() {
        (CharClass::Whitespace, 0)
    } else if c.is_alphabetic() {
        (CharClass::Letter, u32::from(c.to_lowercase().next().unwrap_or(c)))
    } else if c.is_numeric() {
        (CharClass::Digit, c.to_digit(10).unwrap_or(u32::from(c)))
    } else {
        (CharClass::Symbol, symbol_rank(c))
    }
}

/// Known ASCII symbols first, in collator order, then anything else by code point.
fn symbol_rank(c: char) -> u32 {
    match SYMBOL_ORDER.chars().position(|symbol| symbol == c) {
        Some(rank) => rank as u32,
        None => SYMBOL_ORDER.len() as u32 + u32::from(c),
    }
}

fn elements(name: &str) -> Vec<CollationElement> {
    let mut elements: Vec<CollationElement> = Vec::new();

    for c in name.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = elements.last_mut() {
                last.marks.push(c);
                continue;
            }
        }

        elements.push(CollationElement {
            primary: primary_weight(c),
            marks: Vec::new(),
            upper: c.is_uppercase(),
        });
    }

    elements
}

/// Compares two display names for catalog ordering.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let a_elements = elements(a);
    let b_elements = elements(b);

    a_elements
        .iter()
        .map(|e| e.primary)
        .cmp(b_elements.iter().map(|e| e.primary))
        .then_with(|| {
            a_elements
                .iter()
                .map(|e| &e.marks)
                .cmp(b_elements.iter().map(|e| &e.marks))
        })
        .then_with(|| {
            a_elements
                .iter()
                .map(|e| e.upper)
                .cmp(b_elements.iter().map(|e| e.upper))
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|name| name.to_string()).collect();
        names.sort_by(|a, b| compare_names(a, b));
        names
    }

    /// Tests that letter case is ignored at the first level.
    ///
    /// Expected: Alphabetical order regardless of case
    #[test]
    fn test_ignores_case_at_first_level() {
        assert_eq!(sorted(&["zyra", "Ahri", "bard"]), vec!["Ahri", "bard", "zyra"]);
    }

    /// Tests punctuation against letters at the same position.
    ///
    /// Expected: Apostrophe names first
    #[test]
    fn test_punctuation_sorts_before_letters() {
        assert_eq!(
            sorted(&["Kai'Sa", "K'Sante", "Kassadin"]),
            vec!["K'Sante", "Kai'Sa", "Kassadin"]
        );
    }

    /// Tests whitespace against letters and punctuation.
    ///
    /// Expected: Space sorts before letters and hyphens
    #[test]
    fn test_whitespace_sorts_before_letters() {
        assert_eq!(sorted(&["Leesin", "Lee Sin"]), vec!["Lee Sin", "Leesin"]);
        assert_eq!(sorted(&["Lee-Sin", "Lee Sin"]), vec!["Lee Sin", "Lee-Sin"]);
    }

    /// Tests a name that is a prefix of another.
    ///
    /// Expected: Shorter name first
    #[test]
    fn test_shorter_prefix_sorts_first() {
        assert_eq!(sorted(&["Nunu & Willump", "Nunu"]), vec!["Nunu", "Nunu & Willump"]);
    }

    /// Tests names equal except for case.
    ///
    /// Expected: Lower-case first, identical names equal
    #[test]
    fn test_lower_case_breaks_ties() {
        assert_eq!(compare_names("vi", "Vi"), Ordering::Less);
        assert_eq!(compare_names("Vi", "Vi"), Ordering::Equal);
    }

    /// Tests names that differ only in punctuation.
    ///
    /// Verifies that punctuation follows collator order, where the full stop precedes the
    /// apostrophe although its code point is higher.
    ///
    /// Expected: "A.b" before "A'b", "A-b" before both
    #[test]
    fn test_punctuation_follows_collator_order() {
        assert_eq!(sorted(&["A'b", "A.b", "A-b"]), vec!["A-b", "A.b", "A'b"]);
    }

    /// Tests accented letters.
    ///
    /// Verifies that accents are ignored at the first level and only decide between names
    /// that are otherwise equal.
    ///
    /// Expected: "Éclair" among the E names, after unaccented "Eclair", before "Zoe"
    #[test]
    fn test_accents_are_secondary() {
        assert_eq!(
            sorted(&["Zoe", "Éclair", "A.b", "A'b"]),
            vec!["A.b", "A'b", "Éclair", "Zoe"]
        );
        assert_eq!(
            sorted(&["Ezreal", "Éclair", "Eclair"]),
            vec!["Eclair", "Éclair", "Ezreal"]
        );
        assert_eq!(sorted(&["éclair", "Eclair"]), vec!["Eclair", "éclair"]);
    }

    /// Tests that precomposed and decomposed spellings compare equal up to code points.
    ///
    /// Expected: Same primary, accent and case weights
    #[test]
    fn test_precomposed_matches_decomposed() {
        let precomposed = "Zo\u{00eb}";
        let decomposed = "Zoe\u{0308}";

        assert_eq!(
            compare_names(precomposed, "Zoe"),
            compare_names(decomposed, "Zoe")
        );
        assert_eq!(compare_names(precomposed, "Zoe"), Ordering::Greater);
        assert_eq!(compare_names(precomposed, "Zof"), Ordering::Less);
    }
}
