//! Error types for the marquee catalogue store.

use thiserror::Error;

/// The main error type for all marquee operations.
///
/// Query functions never produce these on well-formed input; empty-catalogue
/// cases are reported as sentinel values (`None`, [`SearchOutcome::NoMatch`])
/// instead. Store operations fail fast and propagate unmodified.
///
/// [`SearchOutcome::NoMatch`]: crate::query::SearchOutcome::NoMatch
#[derive(Error, Debug)]
pub enum MarqueeError {
    /// Error reading or writing the persisted catalogue file.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The requested title is not present in the catalogue.
    #[error("movie '{title}' not found")]
    NotFound {
        /// The title that was looked up.
        title: String,
    },

    /// A caller-supplied value is malformed or out of range.
    ///
    /// Produced by the validation layer in front of the store (the CLI),
    /// never by the store itself, which is deliberately permissive.
    #[error("invalid {what}: {reason}")]
    InvalidInput {
        /// Which input was rejected (e.g. "rating", "year").
        what: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors that can occur while loading or saving the catalogue file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The catalogue file exists but could not be read.
    #[error("failed to read catalogue '{path}': {source}")]
    ReadFailed {
        /// The file path that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalogue file could not be written or swapped into place.
    #[error("failed to write catalogue '{path}': {source}")]
    WriteFailed {
        /// The file path that could not be written.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalogue file exists but does not parse as a title→movie map.
    #[error("catalogue '{path}' is corrupted: {source}")]
    Corrupted {
        /// The file path holding the unparsable data.
        path: String,
        /// The underlying JSON parsing error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the catalogue to JSON.
    #[error("failed to serialize catalogue: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// Type alias for `Result<T, MarqueeError>`.
pub type Result<T> = std::result::Result<T, MarqueeError>;
