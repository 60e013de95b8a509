use thiserror::Error;

/// Failures talking to the Steam Web API or Store API.
#[derive(Error, Debug)]
pub enum SteamError {
    /// Steam answered with a non-success status.
    ///
    /// The message mirrors what players see in the `/achievements` reply, so it carries
    /// the status and raw body Steam returned.
    #[error("{service} {status}: {body}")]
    Status {
        /// Human-readable name of the endpoint ("Steam achievements", "Steam store")
        service: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body as returned by Steam
        body: String,
    },

    /// Steam answered with a body that is not the expected JSON.
    #[error("Failed to decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The request URL could not be built.
    #[error("Invalid Steam URL: {0}")]
    Url(#[from] url::ParseError),
}
