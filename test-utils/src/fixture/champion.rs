//! Champion fixtures for creating in-memory test data.

use loldle::Champion;

/// Default test champion name.
pub const DEFAULT_NAME: &str = "Test Champion";

/// Default release year.
pub const DEFAULT_RELEASE_YEAR: i32 = 2015;

/// Creates a champion with default values.
///
/// # Default Values
/// - id: `"TestChampion"`
/// - name: `"Test Champion"`
/// - gender: `"Female"`
/// - positions: `["Middle"]`
/// - species: `["Human"]`
/// - resource: `"Mana"`
/// - range_type: `["Ranged"]`
/// - regions: `["Demacia"]`
/// - release_year: `2015`
pub fn entity() -> Champion {
    entity_builder().build()
}

/// Creates a builder starting from the default champion.
pub fn entity_builder() -> ChampionBuilder {
    ChampionBuilder::new()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Builder for in-memory champions.
pub struct ChampionBuilder {
    champion: Champion,
}

impl ChampionBuilder {
    pub fn new() -> Self {
        Self {
            champion: Champion {
                id: "TestChampion".to_string(),
                name: DEFAULT_NAME.to_string(),
                gender: "Female".to_string(),
                positions: strings(&["Middle"]),
                species: strings(&["Human"]),
                resource: "Mana".to_string(),
                range_type: strings(&["Ranged"]),
                regions: strings(&["Demacia"]),
                release_year: DEFAULT_RELEASE_YEAR,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.champion.id = name.chars().filter(|c| c.is_alphanumeric()).collect();
        self.champion.name = name.to_string();
        self
    }

    pub fn gender(mut self, gender: &str) -> Self {
        self.champion.gender = gender.to_string();
        self
    }

    pub fn positions(mut self, positions: &[&str]) -> Self {
        self.champion.positions = strings(positions);
        self
    }

    pub fn species(mut self, species: &[&str]) -> Self {
        self.champion.species = strings(species);
        self
    }

    pub fn resource(mut self, resource: &str) -> Self {
        self.champion.resource = resource.to_string();
        self
    }

    pub fn range_type(mut self, range_type: &[&str]) -> Self {
        self.champion.range_type = strings(range_type);
        self
    }

    pub fn regions(mut self, regions: &[&str]) -> Self {
        self.champion.regions = strings(regions);
        self
    }

    pub fn release_year(mut self, release_year: i32) -> Self {
        self.champion.release_year = release_year;
        self
    }

    pub fn build(self) -> Champion {
        self.champion
    }
}

impl Default for ChampionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
