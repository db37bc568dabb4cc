//! Response-mapping parse errors

use crate::template::TemplateError;
use thiserror::Error;

/// Errors raised while parsing a response-mapping specification. The
/// first error aborts the whole parse; no partial table is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    /// An entry has no `=` between selector and exit spec
    #[error("Invalid mapping entry '{entry}': missing '='")]
    MissingSeparator {
        /// The offending entry, verbatim
        entry: String,
    },

    /// The selector is neither a class wildcard nor an integer
    #[error("Invalid HTTP code selector: {selector}")]
    InvalidSelector {
        /// The offending selector text
        selector: String,
    },

    /// The exit code is not a non-negative integer
    #[error("Invalid exit code: {text}")]
    InvalidExitCode {
        /// The offending exit-code text
        text: String,
    },

    /// The message template failed to compile
    #[error("Cannot parse message template '{text}': {source}")]
    Template {
        /// The template text, verbatim
        text: String,
        /// The underlying template error
        source: TemplateError,
    },
}
