use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a champion catalog.
///
/// Every variant is fatal: the bot refuses to start rather than serve the game from a
/// partially built catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("Failed to read champion dataset '{}': {source}", .path.display())]
    Io {
        /// Location the dataset was read from
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of champion records.
    #[error("Failed to decode champion dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dataset decoded but contains no records.
    #[error("Champion dataset contains no records")]
    Empty,

    /// A record carries neither a champion id nor a champion name.
    #[error("Champion record #{index} has neither an id nor a name")]
    MissingIdentity {
        /// Position of the record in the source array
        index: usize,
    },

    /// Two champion names collapse onto the same lookup key.
    #[error("Champion '{name}' collides with '{existing}' after name normalization")]
    DuplicateName {
        /// Name of the champion rejected
        name: String,
        /// Name of the champion already holding the key
        existing: String,
    },
}
