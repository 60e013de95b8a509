//! Services used by the bot's commands and scheduled jobs.
//!
//! - `steam` - Steam Web API and Store API client for `/achievements`
//! - `verification` - In-memory store of pending member verifications

pub mod steam;
pub mod verification;
