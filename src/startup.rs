use std::time::Duration;

use loldle::Catalog;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

/// Champion dataset compiled into the binary.
const EMBEDDED_CHAMPION_DATA: &str = include_str!("../data/lol/championData.json");

const HTTP_TIMEOUT_SECONDS: u64 = 15;
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` and default to `info`.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::LoggingErr)` - Invalid filter or a subscriber was already set
pub fn init_tracing() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| AppError::LoggingErr(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::LoggingErr(e.to_string()))
}

/// Builds the HTTP client used for Steam requests.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with timeout and user agent set
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECONDS))
        .user_agent(USER_AGENT)
        .build()?)
}

/// Loads the champion catalog for `/loldle`.
///
/// Reads `LOLDLE_DATA_PATH` when configured, otherwise the embedded dataset. Any load
/// error is fatal.
///
/// # Arguments
/// - `config` - Configuration holding the optional dataset path
///
/// # Returns
/// - `Ok(Catalog)` - Validated, sorted catalog
/// - `Err(AppError::CatalogErr)` - File unreadable, malformed, empty, or inconsistent
pub fn load_catalog(config: &Config) -> Result<Catalog, AppError> {
    let catalog = match &config.loldle_data_path {
        Some(path) => {
            tracing::info!("Loading champion data from {}", path.display());
            Catalog::from_path(path)?
        }
        None => Catalog::from_json(EMBEDDED_CHAMPION_DATA)?,
    };

    Ok(catalog)
}
