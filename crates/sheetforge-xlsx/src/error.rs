//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while assembling or packing an XLSX package
///
/// Every error aborts the current conversion; there is no partial output and
/// no retry below the caller.
#[derive(Debug, Error)]
pub enum XlsxError {
    /// An embedded image uses an extension outside the supported set
    #[error("unsupported image extension: {extension}")]
    UnsupportedMediaType {
        /// The offending extension as supplied by the caller
        extension: String,
    },

    /// The in-memory archive could not be initialized
    #[error("failed to initialize archive")]
    ArchiveInit,

    /// A part could not be added to the archive
    #[error("failed to add archive entry: {name}")]
    ArchiveEntry {
        /// Entry name of the part that failed
        name: String,
        /// Underlying zip error
        #[source]
        source: zip::result::ZipError,
    },

    /// The archive could not be finalized
    #[error("failed to finalize archive")]
    ArchiveFinalize(#[source] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
