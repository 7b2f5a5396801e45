//! Error types for chapterize

use thiserror::Error;

/// Result type alias using ParseError
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that occur while reading an EPUB archive
///
/// Every variant originates at the decoder boundary; normalization itself is
/// total and never fails. Callers branch on the `Result` shape, and the
/// `Display` text is the human-readable diagnostic.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The byte buffer is not a readable ZIP container.
    #[error("Error in underlying Zip archive")]
    InvalidArchive(#[from] zip::result::ZipError),

    /// The container opened, but no readable package manifest was found
    /// (missing or malformed OPF/NCX structure).
    #[error("No readable package manifest: {0}")]
    InvalidPackage(String),

    /// The package is readable but a required metadata field is absent.
    #[error("Missing required metadata: {0}")]
    MissingMetadata(&'static str),
}
