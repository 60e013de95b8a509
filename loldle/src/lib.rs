//! Loldle classic game engine.
//!
//! Provides the guess evaluation engine behind the `/loldle` command: a champion catalog
//! loaded once from a static dataset, name resolution with suggestions, deterministic
//! selection of the champion of the day, and field-by-field comparison of a guess against
//! that target.
//!
//! Everything in this crate is synchronous and free of I/O once the catalog is built. A
//! `Catalog` is immutable after construction and can be shared behind an `Arc` across any
//! number of concurrent readers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use loldle::{evaluate, Catalog, DEFAULT_SUGGESTION_LIMIT};
//!
//! let catalog = Catalog::from_json(include_str!("championData.json"))?;
//!
//! match catalog.resolve("kai sa") {
//!     Some(guess) => {
//!         let target = catalog.daily_target(Utc::now().date_naive());
//!         let evaluation = evaluate(guess, target);
//!         println!("correct: {}", evaluation.is_correct);
//!     }
//!     None => println!("{:?}", catalog.suggest("kai sa", DEFAULT_SUGGESTION_LIMIT)),
//! }
//! ```

pub mod catalog;
pub mod collation;
pub mod compare;
pub mod daily;
pub mod error;
pub mod model;
pub mod normalize;

pub use catalog::{Catalog, DEFAULT_SUGGESTION_LIMIT};
pub use compare::evaluate;
pub use error::CatalogError;
pub use model::{Champion, Evaluation, MatchStatus, RawChampion, YearStatus};
pub use normalize::normalize_name;
