use loldle::{Catalog, CatalogError};
use serde_json::Value;

use crate::factory;

/// Builder for creating test catalogs from raw champion records.
///
/// Records are collected as JSON values and run through the real dataset loader on
/// `build()`, so tests exercise the same decoding, defaulting and sorting as production.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::CatalogBuilder;
///
/// let catalog = CatalogBuilder::new()
///     .with_names(&["Zyra", "Kayle"])
///     .build()?;
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    /// Raw champion records in insertion order.
    records: Vec<Value>,
}

impl CatalogBuilder {
    /// Creates a builder with no records.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Adds one raw record.
    ///
    /// # Arguments
    /// - `record` - JSON object shaped like a dataset entry
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_champion(mut self, record: Value) -> Self {
        self.records.push(record);
        self
    }

    /// Adds several raw records.
    pub fn with_champions(mut self, records: impl IntoIterator<Item = Value>) -> Self {
        self.records.extend(records);
        self
    }

    /// Adds one default record per name.
    pub fn with_names(self, names: &[&str]) -> Self {
        self.with_champions(
            names
                .iter()
                .map(|name| factory::champion::create_champion(name)),
        )
    }

    /// Adds Katarina, Kayle, Kassadin and Zyra with their real attributes.
    ///
    /// See [`factory::champion::roster`].
    pub fn with_roster(self) -> Self {
        self.with_champions(factory::champion::roster())
    }

    /// Renders the collected records as dataset JSON text.
    pub fn to_json(&self) -> String {
        Value::Array(self.records.clone()).to_string()
    }

    /// Builds the catalog through the dataset loader.
    ///
    /// # Returns
    /// - `Ok(Catalog)` - Loaded catalog
    /// - `Err(CatalogError)` - The collected records are not a valid dataset
    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::from_json(&self.to_json())
    }
}
