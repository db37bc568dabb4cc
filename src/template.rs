//! Message templates
//!
//! A template is free text with `{expr}` placeholders, where each
//! placeholder holds a path expression evaluated against the decoded
//! JSON response body. Templates are compiled once when the response
//! mapping is parsed; a rule never stores an uncompiled template.

use crate::path::{self, EvalError, PathExpr, PathParseError};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Template compilation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    /// A `{` placeholder was never closed
    #[error("Unclosed '{{' at position {position}")]
    UnclosedPlaceholder {
        /// Position of the opening brace
        position: usize,
    },

    /// A placeholder contains no expression
    #[error("Empty path expression at position {position}")]
    EmptyPlaceholder {
        /// Position of the opening brace
        position: usize,
    },

    /// The placeholder contents failed to parse as a path expression
    #[error("Invalid path expression at position {position}: {source}")]
    Path {
        /// Position of the opening brace
        position: usize,
        /// The underlying grammar error
        source: PathParseError,
    },
}

/// One piece of a compiled template
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Verbatim text
    Literal(String),
    /// A path expression to evaluate and splice in
    Expr(PathExpr),
}

/// A compiled message template
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Compile template text into segments
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = text.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if c != '{' {
                literal.push(c);
                continue;
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }

            let inner = scan_placeholder(&mut chars, start)?;
            if inner.trim().is_empty() {
                return Err(TemplateError::EmptyPlaceholder { position: start });
            }
            let expr = path::parse(&inner).map_err(|source| TemplateError::Path {
                position: start,
                source,
            })?;
            segments.push(Segment::Expr(expr));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Render the template against a decoded JSON document. The first
    /// expression that fails to resolve aborts rendering with its
    /// error; the caller decides what to fall back to.
    pub fn render(&self, root: &Value) -> Result<String, EvalError> {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Expr(expr) => {
                    let value = path::eval(expr, root)?;
                    output.push_str(&path::render_value(&value));
                }
            }
        }
        Ok(output)
    }

    /// The compiled segments, in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => write!(f, "{text}")?,
                Segment::Expr(expr) => write!(f, "{{{expr}}}")?,
            }
        }
        Ok(())
    }
}

/// Collect placeholder contents up to the matching `}`, leaving quoted
/// strings intact so `{['a}b']}` parses.
fn scan_placeholder(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    start: usize,
) -> Result<String, TemplateError> {
    let mut inner = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (_, c) in chars.by_ref() {
        if let Some(q) = quote {
            inner.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
        } else {
            match c {
                '}' => return Ok(inner),
                '\'' | '"' => {
                    quote = Some(c);
                    inner.push(c);
                }
                other => inner.push(other),
            }
        }
    }

    Err(TemplateError::UnclosedPlaceholder { position: start })
}
