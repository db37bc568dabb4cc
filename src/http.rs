//! HTTP request execution
//!
//! One blocking request per run, fully buffered in both directions.
//! The response is collected into [`ResponseParts`] so everything
//! downstream of the network call is pure.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Fixed request timeout; the probe makes a single attempt
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Transport errors; each one terminates the run with exit code 1
#[derive(Error, Debug)]
pub enum HttpError {
    /// The method string is not a valid HTTP method token
    #[error("Invalid HTTP method: {method}")]
    InvalidMethod {
        /// The offending method text
        method: String,
    },

    /// The request could not be constructed
    #[error("Cannot create HTTP request: {source}")]
    Build {
        /// The underlying client error
        source: reqwest::Error,
    },

    /// The request could not be executed
    #[error("Cannot execute request: {source}")]
    Request {
        /// The underlying client error
        source: reqwest::Error,
    },

    /// The response body could not be read
    #[error("Cannot read response body: {source}")]
    Body {
        /// The underlying client error
        source: reqwest::Error,
    },
}

/// The parts of a response the mapping pipeline consumes
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseParts {
    /// Numeric status code
    pub status: u16,
    /// Status line, e.g. `404 Not Found`
    pub status_line: String,
    /// Verbatim `content-type` header value, if present
    pub content_type: Option<String>,
    /// Fully buffered response body
    pub body: Vec<u8>,
}

impl ResponseParts {
    /// Whether the body should be decoded as JSON. The content type
    /// must be exactly `application/json`; parameters such as a
    /// charset disqualify it.
    pub fn is_json(&self) -> bool {
        self.content_type.as_deref() == Some("application/json")
    }
}

/// Build the status line from a status code
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// Execute a single request and buffer the response
pub fn execute(method: &str, url: &str, body: Option<Vec<u8>>) -> Result<ResponseParts, HttpError> {
    let method =
        Method::from_bytes(method.as_bytes()).map_err(|_| HttpError::InvalidMethod {
            method: method.to_string(),
        })?;

    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|source| HttpError::Build { source })?;

    let mut builder = client.request(method, url);
    if let Some(bytes) = body {
        builder = builder.body(bytes);
    }
    let request = builder
        .build()
        .map_err(|source| HttpError::Build { source })?;

    let response = client
        .execute(request)
        .map_err(|source| HttpError::Request { source })?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    log::debug!("response status: {}", status_line(status));

    let body = response
        .bytes()
        .map_err(|source| HttpError::Body { source })?
        .to_vec();

    Ok(ResponseParts {
        status: status.as_u16(),
        status_line: status_line(status),
        content_type,
        body,
    })
}
