//! The champion catalog: loading, lookup and suggestions.

use std::collections::HashMap;
use std::path::Path;

use crate::{
    collation::compare_names,
    error::CatalogError,
    model::{Champion, RawChampion},
    normalize::normalize_name,
};

/// Number of suggestions offered when a guess does not resolve.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Immutable, sorted collection of every guessable champion.
///
/// Built once at startup and never mutated afterwards. Champions are ordered by display
/// name (see [`crate::collation`]) so index-based operations such as the daily target are
/// deterministic for a given dataset. A lookup index maps each normalized name to exactly
/// one champion.
#[derive(Debug, Clone)]
pub struct Catalog {
    champions: Vec<Champion>,
    /// Normalized names, parallel to `champions`.
    keys: Vec<String>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from the JSON dataset text.
    ///
    /// # Arguments
    /// - `json` - A JSON array of champion records
    ///
    /// # Returns
    /// - `Ok(Catalog)` - Sorted catalog with its lookup index
    /// - `Err(CatalogError::Parse)` - Input is not an array of records
    /// - `Err(CatalogError)` - Any error from [`Catalog::from_records`]
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<RawChampion> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Reads and builds a catalog from a JSON dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    /// Builds a catalog from decoded dataset records.
    ///
    /// Converts every record into a [`Champion`], sorts by display name and indexes the
    /// normalized names. Fails on the first invalid record so a partially built catalog is
    /// never returned.
    ///
    /// # Returns
    /// - `Ok(Catalog)` - Non-empty catalog
    /// - `Err(CatalogError::Empty)` - No records
    /// - `Err(CatalogError::MissingIdentity)` - A record has neither id nor name
    /// - `Err(CatalogError::DuplicateName)` - Two names normalize to the same key
    pub fn from_records(records: Vec<RawChampion>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut champions = records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Champion::from_raw(raw).ok_or(CatalogError::MissingIdentity { index }))
            .collect::<Result<Vec<_>, _>>()?;

        champions.sort_by(|a, b| compare_names(&a.name, &b.name));

        let keys: Vec<String> = champions.iter().map(|c| normalize_name(&c.name)).collect();
        let mut index = HashMap::with_capacity(keys.len());

        for (position, key) in keys.iter().enumerate() {
            if let Some(&existing) = index.get(key) {
                let existing: &Champion = &champions[existing];
                return Err(CatalogError::DuplicateName {
                    name: champions[position].name.clone(),
                    existing: existing.name.clone(),
                });
            }

            index.insert(key.clone(), position);
        }

        Ok(Self {
            champions,
            keys,
            index,
        })
    }

    /// Number of champions in the catalog, always greater than zero.
    pub fn len(&self) -> usize {
        self.champions.len()
    }

    /// Always `false`; construction rejects empty datasets.
    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    /// Champions in catalog order.
    pub fn champions(&self) -> &[Champion] {
        &self.champions
    }

    /// Looks up a champion by name, ignoring case and punctuation.
    ///
    /// # Arguments
    /// - `input` - Free-text guess
    ///
    /// # Returns
    /// - `Some(&Champion)` - Champion whose normalized name equals the normalized input
    /// - `None` - No such champion
    pub fn resolve(&self, input: &str) -> Option<&Champion> {
        self.index
            .get(&normalize_name(input))
            .map(|&position| &self.champions[position])
    }

    /// Suggests display names resembling an unresolved guess.
    ///
    /// Names whose normalized form starts with the normalized input come first, in catalog
    /// order. When fewer than `limit` of those exist, names that merely contain the input
    /// fill the remaining slots, again in catalog order and without repeats.
    ///
    /// # Arguments
    /// - `input` - Free-text guess that failed to resolve
    /// - `limit` - Maximum number of names returned
    ///
    /// # Returns
    /// - `Vec<String>` - Up to `limit` display names; empty when the input has no letters
    ///   or digits
    pub fn suggest(&self, input: &str, limit: usize) -> Vec<String> {
        let needle = normalize_name(input);

        if needle.is_empty() {
            return Vec::new();
        }

        let mut picked: Vec<usize> = self
            .keys
            .iter()
            .enumerate()
            .filter(|(_, key)| key.starts_with(&needle))
            .map(|(position, _)| position)
            .collect();

        if picked.len() < limit {
            let contains = self
                .keys
                .iter()
                .enumerate()
                .filter(|(_, key)| key.contains(&needle))
                .map(|(position, _)| position);

            for position in contains {
                if !picked.contains(&position) {
                    picked.push(position);
                }
            }
        }

        picked
            .into_iter()
            .take(limit)
            .map(|position| self.champions[position].name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Catalog {
        let records = names
            .iter()
            .map(|name| RawChampion {
                champion_id: Some(name.to_string()),
                champion_name: Some(name.to_string()),
                ..Default::default()
            })
            .collect();

        Catalog::from_records(records).unwrap()
    }

    /// Tests that the catalog is sorted by display name.
    ///
    /// Names with punctuation sort before longer names sharing the prefix.
    ///
    /// Expected: Catalog order Ahri, K'Sante, Kai'Sa, Zyra
    #[test]
    fn test_sorts_by_display_name() {
        let catalog = catalog(&["Zyra", "Kai'Sa", "Ahri", "K'Sante"]);
        let names: Vec<&str> = catalog.champions().iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["Ahri", "K'Sante", "Kai'Sa", "Zyra"]);
    }

    /// Tests the internal lookup structures.
    ///
    /// Verifies that each stored key is the normalized name of the champion at the same
    /// position and that the index points back at that position.
    ///
    /// Expected: Keys, index and champions agree
    #[test]
    fn test_keys_are_parallel_to_champions() {
        let catalog = catalog(&["Lee Sin", "Dr. Mundo", "Vi"]);

        for (champion, key) in catalog.champions.iter().zip(&catalog.keys) {
            assert_eq!(&normalize_name(&champion.name), key);
            assert_eq!(catalog.index[key], catalog.keys.iter().position(|k| k == key).unwrap());
        }
    }

    /// Tests suggestion order when prefix matches do not fill the limit.
    ///
    /// Expected: Prefix match first, then contains matches in catalog order
    #[test]
    fn test_contains_matches_follow_prefix_matches() {
        let catalog = catalog(&["Annie", "Yasuo", "Ashe", "Sona"]);

        assert_eq!(catalog.suggest("s", 5), vec!["Sona", "Ashe", "Yasuo"]);
    }

    /// Tests a suggestion limit of zero.
    ///
    /// Expected: Empty list even though a name matches
    #[test]
    fn test_zero_limit_returns_nothing() {
        let catalog = catalog(&["Annie"]);

        assert!(catalog.suggest("ann", 0).is_empty());
    }
}
