//! Error types for the export engine.
//!
//! Infrastructure failures (I/O, store access, serialization) are `Error`s and
//! propagate with `?`. Request-level problems a caller is expected to show to a
//! user are not errors here; see [`crate::export::ExportFailure`].

/// Result type alias for export engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, fetching, or writing an export.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The record store failed to answer a query
    #[error("Record store error: {0}")]
    Store(String),

    /// A dataset could not be loaded into a store
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}
