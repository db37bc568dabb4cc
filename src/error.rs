//! Top-level error type
//!
//! Every expected failure terminates the run with exit code 1 and a
//! single descriptive line; nothing is retried or resumed.

use crate::http::HttpError;
use crate::mapping::MappingError;
use thiserror::Error;

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort the run
#[derive(Error, Debug)]
pub enum Error {
    /// No target URL was given
    #[error("No url provided")]
    MissingUrl,

    /// The `-r` specification was rejected
    #[error("Invalid response mapping: {0}")]
    Mapping(#[from] MappingError),

    /// A request-body file could not be read
    #[error("Cannot read file {path}: {source}")]
    BodyFile {
        /// The file named after `@`
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("Cannot read standard input: {source}")]
    Stdin {
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Transport failure
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body failed to decode as JSON while a template
    /// expected structured data
    #[error("Cannot process JSON response: {source}")]
    Decode {
        /// The underlying decode error
        source: serde_json::Error,
    },
}
