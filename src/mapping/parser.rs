//! Parser for the response-mapping specification
//!
//! The wire format is a semicolon-separated list of entries:
//!
//! ```text
//! spec     := "" | entry (";" entry)*
//! entry    := selector "=" exitspec
//! selector := "2XX" | "4XX" | "5XX" | <decimal integer>
//! exitspec := exitcode | exitcode ":" template
//! ```
//!
//! The entry splits on the first `=`, the exit spec on the first `:`;
//! everything after that colon is template text verbatim, further
//! colons included.

use super::error::MappingError;
use super::{MappingRule, MappingTable, Selector};
use crate::template::Template;

/// Parse a mapping specification into a table. An empty specification
/// yields an empty, valid table.
pub fn parse(spec: &str) -> Result<MappingTable, MappingError> {
    let mut table = MappingTable::new();

    if spec.is_empty() {
        return Ok(table);
    }

    for entry in spec.split(';') {
        let (selector_text, exit_spec) =
            entry
                .split_once('=')
                .ok_or_else(|| MappingError::MissingSeparator {
                    entry: entry.to_string(),
                })?;

        let selector = Selector::parse(selector_text)?;
        let rule = parse_exit_spec(exit_spec)?;

        if table.insert(selector, rule).is_some() {
            log::debug!("selector {selector} redefined; keeping the later entry");
        }
    }

    Ok(table)
}

fn parse_exit_spec(exit_spec: &str) -> Result<MappingRule, MappingError> {
    let (exit_code_text, template_text) = match exit_spec.split_once(':') {
        Some((code, template)) => (code, Some(template)),
        None => (exit_spec, None),
    };

    let exit_code =
        exit_code_text
            .parse::<i32>()
            .ok()
            .filter(|code| *code >= 0)
            .ok_or_else(|| MappingError::InvalidExitCode {
                text: exit_code_text.to_string(),
            })?;

    let template = template_text
        .map(|text| {
            Template::parse(text).map_err(|source| MappingError::Template {
                text: text.to_string(),
                source,
            })
        })
        .transpose()?;

    Ok(MappingRule {
        exit_code,
        template,
    })
}
