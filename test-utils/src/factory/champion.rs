//! Champion record factory.

use serde_json::{json, Map, Value};

use crate::factory::helpers::next_id;

/// Factory for raw champion records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::champion::ChampionFactory;
///
/// let record = ChampionFactory::new()
///     .name("Lee Sin")
///     .resource("Energy")
///     .build();
/// ```
pub struct ChampionFactory {
    fields: Map<String, Value>,
}

impl ChampionFactory {
    /// Creates a new ChampionFactory with default values.
    ///
    /// Defaults:
    /// - championId / championName: `"Champion{id}"` / `"Champion {id}"`, id auto-incremented
    /// - gender: `"Female"`
    /// - positions: `["Middle"]`
    /// - species: `["Human"]`
    /// - resource: `"Mana"`
    /// - range_type: `["Ranged"]`
    /// - regions: `["Runeterra"]`
    /// - release_date: `"2010-01-01"`
    pub fn new() -> Self {
        let id = next_id();
        let fields = json!({
            "championId": format!("Champion{}", id),
            "championName": format!("Champion {}", id),
            "gender": "Female",
            "positions": ["Middle"],
            "species": ["Human"],
            "resource": "Mana",
            "range_type": ["Ranged"],
            "regions": ["Runeterra"],
            "release_date": "2010-01-01",
        });

        let Value::Object(fields) = fields else {
            unreachable!("json! object literal")
        };

        Self { fields }
    }

    fn set(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Sets the display name and derives the id from it.
    pub fn name(self, name: &str) -> Self {
        let id: String = name.chars().filter(|c| c.is_alphanumeric()).collect();
        self.set("championName", json!(name)).set("championId", json!(id))
    }

    pub fn id(self, id: &str) -> Self {
        self.set("championId", json!(id))
    }

    pub fn gender(self, gender: &str) -> Self {
        self.set("gender", json!(gender))
    }

    pub fn positions(self, positions: &[&str]) -> Self {
        self.set("positions", json!(positions))
    }

    pub fn species(self, species: &[&str]) -> Self {
        self.set("species", json!(species))
    }

    pub fn resource(self, resource: &str) -> Self {
        self.set("resource", json!(resource))
    }

    pub fn range_type(self, range_type: &[&str]) -> Self {
        self.set("range_type", json!(range_type))
    }

    pub fn regions(self, regions: &[&str]) -> Self {
        self.set("regions", json!(regions))
    }

    pub fn release_date(self, release_date: &str) -> Self {
        self.set("release_date", json!(release_date))
    }

    /// Sets a field to JSON `null`.
    pub fn null(self, key: &str) -> Self {
        self.set(key, Value::Null)
    }

    /// Removes a field from the record entirely.
    pub fn missing(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    /// Builds the raw record.
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for ChampionFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a record with default attributes and the given display name.
pub fn create_champion(name: &str) -> Value {
    ChampionFactory::new().name(name).build()
}

/// Records for Katarina, Kayle, Kassadin and Zyra with their real attributes.
///
/// Returned in an order different from catalog order so tests also cover sorting.
pub fn roster() -> Vec<Value> {
    vec![
        ChampionFactory::new()
            .name("Zyra")
            .gender("Female")
            .positions(&["Support"])
            .species(&["Plant"])
            .resource("Mana")
            .range_type(&["Ranged"])
            .regions(&["Ixtal"])
            .release_date("2012-07-24")
            .build(),
        ChampionFactory::new()
            .name("Katarina")
            .gender("Female")
            .positions(&["Middle"])
            .species(&["Human"])
            .resource("Manaless")
            .range_type(&["Melee"])
            .regions(&["Noxus"])
            .release_date("2009-09-19")
            .build(),
        ChampionFactory::new()
            .name("Kayle")
            .gender("Female")
            .positions(&["Top"])
            .species(&["Human", "Celestial"])
            .resource("Mana")
            .range_type(&["Melee", "Ranged"])
            .regions(&["Demacia"])
            .release_date("2009-02-21")
            .build(),
        ChampionFactory::new()
            .name("Kassadin")
            .gender("Male")
            .positions(&["Middle"])
            .species(&["Human", "Void-Being"])
            .resource("Mana")
            .range_type(&["Melee"])
            .regions(&["Void", "Shurima"])
            .release_date("2009-08-07")
            .build(),
    ]
}
