//! Test fixtures providing in-memory champions without going through the loader.
//!
//! Unlike factories, fixtures build `loldle::Champion` values directly. Use them for
//! comparator and rendering tests where a catalog is unnecessary.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let guess = fixture::champion::entity();
//! let target = fixture::champion::entity_builder()
//!     .name("Target")
//!     .positions(&["Top", "Middle"])
//!     .build();
//! ```

pub mod champion;
