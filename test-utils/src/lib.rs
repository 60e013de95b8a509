//! Igorbot Test Utils
//!
//! Provides shared testing utilities for the bot and the `loldle` engine. Tests build
//! champion catalogs from small, explicit datasets instead of the shipped one so that
//! expectations about ordering, suggestions and the daily target stay readable.
//!
//! # Overview
//!
//! - **CatalogBuilder**: Fluent builder assembling raw records into a `Catalog`
//! - **factory**: Raw JSON champion records, shaped exactly like the dataset file
//! - **fixture**: In-memory `Champion` values for comparator tests, no catalog needed
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::CatalogBuilder, factory};
//!
//! #[test]
//! fn test_resolves_katarina() {
//!     let catalog = CatalogBuilder::new()
//!         .with_roster()
//!         .with_champion(factory::champion::create_champion("Ahri"))
//!         .build()
//!         .unwrap();
//!
//!     assert!(catalog.resolve("KATARINA").is_some());
//! }
//! ```

pub mod builder;
pub mod factory;
pub mod fixture;
