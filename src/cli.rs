//! Command-line configuration
//!
//! All knobs live in one [`Cli`] struct constructed once in `main`
//! and passed by reference into the pipeline; there is no global
//! mutable state.

use crate::error::{Error, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

const MAPPING_LONG_HELP: &str = "\
Response mapping in the form `X1;X2;X3...` where each Xi is
CODE=MAPPING. CODE is either a numeric HTTP response code or one of
the class wildcards `2XX`, `4XX`, `5XX`. MAPPING is either a number
used as the process exit code (EC) or `EC:MESSAGE_TEMPLATE` where
MESSAGE_TEMPLATE is free text with {}-enclosed path expressions
(e.g. `{.error.message}`) evaluated with the JSON response body as
the root document.";

const BODY_LONG_HELP: &str = "\
Request body (for POST, PUT and other requests with a body). If the
value starts with @ the rest is a name of the file to read the body
from; the special filename `-` indicates standard input.";

/// Probe an HTTP endpoint and map the response onto an exit code
#[derive(Parser, Debug)]
#[command(name = "respmap", version, about)]
pub struct Cli {
    /// Target URL
    #[arg(short = 'a', value_name = "URL")]
    pub url: Option<String>,

    /// HTTP method
    #[arg(short = 'm', default_value = "GET", value_name = "METHOD")]
    pub method: String,

    /// Request body, or @file / @- to read it from a file or stdin
    #[arg(short = 'b', value_name = "BODY", long_help = BODY_LONG_HELP)]
    pub body: Option<String>,

    /// Response mapping specification
    #[arg(
        short = 'r',
        default_value = "",
        value_name = "SPEC",
        long_help = MAPPING_LONG_HELP
    )]
    pub mapping: String,

    /// Verbose output
    #[arg(short = 'v')]
    pub verbose: bool,
}

/// Where the request body comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    /// The `-b` value itself
    Literal(String),
    /// A file named after `@`
    File(PathBuf),
    /// Standard input (`@-`)
    Stdin,
}

impl Cli {
    /// Resolve the `-b` value into a body source. The body is only
    /// consulted for methods that carry one; the caller decides when
    /// to call this.
    pub fn body_source(&self) -> Option<BodySource> {
        let body = self.body.as_deref()?;
        Some(match body.strip_prefix('@') {
            Some("-") => BodySource::Stdin,
            Some(path) => BodySource::File(PathBuf::from(path)),
            None => BodySource::Literal(body.to_string()),
        })
    }
}

/// Read a body source fully into memory
pub fn read_body(source: &BodySource) -> Result<Vec<u8>> {
    match source {
        BodySource::Literal(text) => Ok(text.clone().into_bytes()),
        BodySource::File(path) => fs::read(path).map_err(|source| Error::BodyFile {
            path: path.display().to_string(),
            source,
        }),
        BodySource::Stdin => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|source| Error::Stdin { source })?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(body: Option<&str>) -> Cli {
        Cli {
            url: Some("http://localhost/".into()),
            method: "POST".into(),
            body: body.map(str::to_owned),
            mapping: String::new(),
            verbose: false,
        }
    }

    #[test]
    fn test_literal_body() {
        assert_eq!(
            cli(Some("payload")).body_source(),
            Some(BodySource::Literal("payload".into()))
        );
    }

    #[test]
    fn test_file_body() {
        assert_eq!(
            cli(Some("@request.json")).body_source(),
            Some(BodySource::File(PathBuf::from("request.json")))
        );
    }

    #[test]
    fn test_stdin_body() {
        assert_eq!(cli(Some("@-")).body_source(), Some(BodySource::Stdin));
    }

    #[test]
    fn test_no_body() {
        assert_eq!(cli(None).body_source(), None);
    }

    #[test]
    fn test_missing_body_file() {
        let source = BodySource::File(PathBuf::from("/nonexistent/body.json"));
        assert!(matches!(
            read_body(&source),
            Err(Error::BodyFile { .. })
        ));
    }

    #[test]
    fn test_cli_parses_all_flags() {
        use clap::Parser;
        let cli = Cli::parse_from([
            "respmap",
            "-a",
            "http://example.com/health",
            "-m",
            "POST",
            "-b",
            "@-",
            "-r",
            "2XX=0;5XX=2",
            "-v",
        ]);
        assert_eq!(cli.url.as_deref(), Some("http://example.com/health"));
        assert_eq!(cli.method, "POST");
        assert_eq!(cli.mapping, "2XX=0;5XX=2");
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_defaults() {
        use clap::Parser;
        let cli = Cli::parse_from(["respmap", "-a", "http://example.com/"]);
        assert_eq!(cli.method, "GET");
        assert_eq!(cli.mapping, "");
        assert!(cli.body.is_none());
        assert!(!cli.verbose);
    }
}
