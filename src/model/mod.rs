//! Data shapes exchanged with external services.

pub mod steam;
