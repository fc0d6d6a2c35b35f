use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Status icon errors with source location tracking.
#[derive(Error, Debug)]
pub enum IconError {
    /// Theme name is not one of the built-in themes.
    #[error("Wrong theme name: '{name}' (should be 'dark' or 'light') {location}")]
    InvalidTheme {
        /// The rejected theme name.
        name: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The notification icon could not be written to a temporary file.
    #[error("Icon store error: {source} {location}")]
    AssetStore {
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The animation ticker thread could not be started.
    #[error("Ticker thread spawn failed: {source} {location}")]
    TickerSpawn {
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The notification icon temporary file could not be removed.
    #[error("Icon remove error: {path:?}: {source} {location}")]
    AssetRemove {
        /// Path of the file that could not be deleted.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`IconError`].
pub type Result<T> = std::result::Result<T, IconError>;
