//! Error handling for RoomKit
//!
//! Almost every editing operation in the engine is infallible: missing
//! context, locked elements and degenerate geometry are silent no-ops. The
//! types here cover the one condition a host must actually report:
//! a project document that cannot be parsed or encoded. File I/O is
//! reported by the designer with `anyhow` context on top of these.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Project document error type
///
/// Raised only when a serialized project is not usable as a document.
/// Missing or malformed sections inside a well-formed document are
/// replaced with defaults during import and never produce this error.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The text is not well-formed JSON
    #[error("Document is not well-formed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document root is not a JSON object
    #[error("Document root must be an object, found {found}")]
    NotAnObject {
        /// The JSON type found at the root.
        found: String,
    },

    /// The document could not be encoded
    #[error("Failed to encode document: {reason}")]
    Encode {
        /// The reason encoding failed.
        reason: String,
    },
}

/// Main error type for RoomKit
#[derive(Error, Debug)]
pub enum Error {
    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl Error {
    /// Check if this error means the document itself is unusable
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type for RoomKit operations
pub type Result<T> = std::result::Result<T, Error>;
