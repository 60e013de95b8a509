use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

/// Bot configuration read from the environment.
///
/// Only the Discord token is required. Every other setting enables an optional feature:
/// guild-scoped command registration, the Steam lookup, the verification flow, or an
/// alternative champion dataset.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,

    /// Guild to register slash commands in; commands are registered globally when unset.
    pub guild_id: Option<u64>,

    pub steam_api_key: Option<String>,

    pub verification_channel_id: Option<u64>,
    pub verified_role_id: Option<u64>,

    /// Champion dataset overriding the one embedded in the binary.
    pub loldle_data_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, which returns the raw value of a variable.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        Ok(Self {
            discord_token: optional_var(&lookup, "DISCORD_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            guild_id: optional_id(&lookup, "GUILD_ID")?,
            steam_api_key: optional_var(&lookup, "STEAM_API_KEY"),
            verification_channel_id: optional_id(&lookup, "VERIFICATION_CHANNEL_ID")?,
            verified_role_id: optional_id(&lookup, "VERIFIED_ROLE_ID")?,
            loldle_data_path: optional_var(&lookup, "LOLDLE_DATA_PATH").map(PathBuf::from),
        })
    }
}

/// Reads a variable, treating unset and blank values alike.
fn optional_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Reads an optional Discord snowflake.
fn optional_id(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<u64>, ConfigError> {
    optional_var(lookup, name)
        .map(|value| parse_id(name, value))
        .transpose()
}

fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    value
        .parse::<u64>()
        .map_err(|source| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            source,
        })
}
