//! Pipeline orchestration
//!
//! One pass, no loops: parse the mapping, issue the request, classify
//! the response, render the message. Every path ends in a
//! [`Completion`] or an [`Error`](crate::Error); only the binary
//! prints or exits.

use crate::cli::{self, Cli};
use crate::dispatch::dispatch;
use crate::error::{Error, Result};
use crate::http::{self, ResponseParts};
use crate::mapping::{self, MappingTable};
use crate::render::{Completion, render};

/// Run the whole probe for a parsed command line
pub fn run(cli: &Cli) -> Result<Completion> {
    let table = mapping::parse(&cli.mapping)?;
    let url = cli.url.as_deref().ok_or(Error::MissingUrl)?;

    let body = if matches!(cli.method.as_str(), "POST" | "PUT") {
        match cli.body_source() {
            Some(source) => Some(cli::read_body(&source)?),
            None => None,
        }
    } else {
        None
    };

    log::debug!("{} {}", cli.method, url);
    let parts = http::execute(&cli.method, url, body)?;

    complete(&table, &parts)
}

/// Classify a buffered response and render its message. This is the
/// pure tail of the pipeline, independent of any network I/O.
pub fn complete(table: &MappingTable, parts: &ResponseParts) -> Result<Completion> {
    render(dispatch(parts, table), parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with(url: Option<&str>, mapping: &str) -> Cli {
        Cli {
            url: url.map(str::to_owned),
            method: "GET".into(),
            body: None,
            mapping: mapping.into(),
            verbose: false,
        }
    }

    #[test]
    fn test_mapping_is_rejected_before_any_request() {
        // bad mapping fails even with no URL configured
        let err = run(&cli_with(None, "bogus")).unwrap_err();
        assert!(matches!(err, Error::Mapping(_)));
    }

    #[test]
    fn test_missing_url_is_a_startup_error() {
        let err = run(&cli_with(None, "")).unwrap_err();
        assert!(matches!(err, Error::MissingUrl));
    }
}
