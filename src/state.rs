//! Shared state handed to every event handler.
//!
//! Built once during startup. All fields are cheap to clone:
//! - `Arc<Config>` and `Arc<Catalog>` are reference-counted and read-only
//! - `reqwest::Client` uses an `Arc` internally
//! - `VerificationService` uses `Arc` for its store

use std::sync::Arc;

use loldle::Catalog;

use crate::{config::Config, service::verification::VerificationService};

#[derive(Clone)]
pub struct BotState {
    pub config: Arc<Config>,

    /// Champion catalog for `/loldle`. Immutable for the life of the process.
    pub catalog: Arc<Catalog>,

    /// HTTP client for Steam requests.
    pub http_client: reqwest::Client,

    pub verification: VerificationService,
}

impl BotState {
    pub fn new(
        config: Config,
        catalog: Catalog,
        http_client: reqwest::Client,
        verification: VerificationService,
    ) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            http_client,
            verification,
        }
    }
}
