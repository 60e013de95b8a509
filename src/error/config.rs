use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable holding a Discord ID is not a valid snowflake.
    #[error("Environment variable {name} must be a numeric Discord ID, got '{value}': {source}")]
    InvalidEnvVar {
        /// Name of the variable
        name: String,
        /// The value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
