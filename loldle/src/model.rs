//! Champion records and evaluation results.

use serde::Deserialize;

use crate::normalize::parse_release_year;

/// Label used for categorical fields missing from the dataset.
pub const UNKNOWN: &str = "Unknown";

/// Champion record exactly as it appears in the JSON dataset.
///
/// Every field is optional; absent and `null` values are both accepted and defaulted when
/// the record is converted into a [`Champion`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChampion {
    #[serde(rename = "championId")]
    pub champion_id: Option<String>,
    #[serde(rename = "championName")]
    pub champion_name: Option<String>,
    pub species: Option<Vec<String>>,
    pub regions: Option<Vec<String>>,
    pub positions: Option<Vec<String>>,
    pub resource: Option<String>,
    pub release_date: Option<String>,
    pub range_type: Option<Vec<String>>,
    pub gender: Option<String>,
}

/// A guessable champion with its comparable attributes.
///
/// List fields keep the dataset order for display; comparisons treat them as
/// case-insensitive sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Champion {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub positions: Vec<String>,
    pub species: Vec<String>,
    pub resource: String,
    pub range_type: Vec<String>,
    pub regions: Vec<String>,
    /// Release year, `0` when the dataset has no parseable date.
    pub release_year: i32,
}

impl Champion {
    /// Converts a raw dataset record, filling defaults for absent fields.
    ///
    /// A record with only one of id and name borrows the other: a missing name falls back to
    /// the id, a missing id to the name stripped of non-alphanumeric characters. Blank strings
    /// count as missing.
    ///
    /// # Arguments
    /// - `raw` - The decoded dataset record
    ///
    /// # Returns
    /// - `Some(Champion)` - Normalized champion
    /// - `None` - Record has neither id nor name
    pub fn from_raw(raw: RawChampion) -> Option<Self> {
        let id = raw.champion_id.filter(|id| !id.trim().is_empty());
        let name = raw.champion_name.filter(|name| !name.trim().is_empty());

        let (id, name) = match (id, name) {
            (Some(id), Some(name)) => (id, name),
            (Some(id), None) => (id.clone(), id),
            (None, Some(name)) => (name.chars().filter(|c| c.is_alphanumeric()).collect(), name),
            (None, None) => return None,
        };

        Some(Self {
            id,
            name,
            gender: raw.gender.unwrap_or_else(|| UNKNOWN.to_string()),
            positions: raw.positions.unwrap_or_default(),
            species: raw.species.unwrap_or_default(),
            resource: raw.resource.unwrap_or_else(|| UNKNOWN.to_string()),
            range_type: raw.range_type.unwrap_or_default(),
            regions: raw.regions.unwrap_or_default(),
            release_year: parse_release_year(raw.release_date.as_deref()),
        })
    }
}

/// How a guessed field relates to the target's field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    Match,
    Partial,
    Mismatch,
}

/// Where the target's release year lies relative to the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearStatus {
    Match,
    /// Target was released later than the guess.
    Higher,
    /// Target was released earlier than the guess.
    Lower,
}

/// Field-by-field report for one guess against the target champion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<'a> {
    pub guess: &'a Champion,
    pub target: &'a Champion,
    /// `true` iff the display names are identical.
    pub is_correct: bool,
    pub gender: MatchStatus,
    pub positions: MatchStatus,
    pub species: MatchStatus,
    pub resource: MatchStatus,
    pub range_type: MatchStatus,
    pub regions: MatchStatus,
    pub release_year: YearStatus,
}
