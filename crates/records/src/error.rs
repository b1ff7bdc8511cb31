//! Error types for the records crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - `#[from]` conversions so `?` works on csv, serde_json and I/O errors
//! - Error variants that carry the offending value for context

use thiserror::Error;

/// Errors that can occur while decoding or encoding property records
///
/// Rust concept: The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from our `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum RecordError {
    /// Input could be read as neither CSV nor JSON
    ///
    /// Both underlying messages are kept so the user can see why each
    /// encoding was rejected.
    #[error("cannot parse input data as CSV ({csv}) or JSON ({json})")]
    UnrecognizedFormat { csv: String, json: String },

    /// A format name that is not one of the supported encodings
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// A `[x, y]` coordinate cell that does not parse
    #[error("malformed coordinate {value:?}: {reason}")]
    MalformedCoordinate { value: String, reason: String },

    /// An embedded amenity object literal that is not valid JSON
    #[error("malformed amenity set {value:?}: {reason}")]
    MalformedAmenitySet { value: String, reason: String },

    /// CSV header row does not list exactly the expected columns
    #[error("unexpected CSV header: expected [{expected}], found [{found}]")]
    HeaderMismatch { expected: String, found: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecordError>;
