//! Factory methods for creating raw dataset records.
//!
//! Each factory produces `serde_json::Value` objects shaped exactly like entries of
//! `championData.json`, so tests can cover absent and `null` fields the way the loader
//! sees them.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let record = factory::champion::create_champion("Ahri");
//!
//! // Customize
//! let record = factory::champion::ChampionFactory::new()
//!     .name("Kai'Sa")
//!     .positions(&["Bottom"])
//!     .missing("release_date")
//!     .build();
//! ```

pub mod champion;
pub mod helpers;
