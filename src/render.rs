//! Message rendering
//!
//! Turns a selected rule and a buffered response into the final
//! message and exit code. Decode failure is fatal; a template that
//! does not resolve against the document is not, and falls back to
//! the default message.

use crate::dispatch::Disposition;
use crate::error::{Error, Result};
use crate::http::ResponseParts;
use crate::mapping::MappingRule;
use serde_json::Value;

/// The terminal outcome of a run: what to print (if anything) and the
/// process exit code. The binary is the only place that performs the
/// print and the exit.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Line to write to standard output, newline-terminated by the caller
    pub output: Option<String>,
    /// Process exit code
    pub code: i32,
}

impl Completion {
    /// Silent success (2xx with no matching rule)
    pub fn no_action() -> Self {
        Self {
            output: None,
            code: 0,
        }
    }
}

/// Produce the completion for a classified response
pub fn render(disposition: Disposition<'_>, parts: &ResponseParts) -> Result<Completion> {
    match disposition {
        Disposition::NoAction => Ok(Completion::no_action()),
        Disposition::Unmapped { status_line, .. } => Ok(Completion {
            output: Some(format!("Unexpected response: {status_line}")),
            code: 1,
        }),
        Disposition::Matched {
            rule,
            default_message,
        } => render_rule(rule, parts, default_message),
    }
}

fn render_rule(
    rule: &MappingRule,
    parts: &ResponseParts,
    default_message: String,
) -> Result<Completion> {
    let mut message = default_message;

    if let Some(template) = &rule.template {
        if parts.is_json() {
            let document: Value =
                serde_json::from_slice(&parts.body).map_err(|source| Error::Decode { source })?;
            match template.render(&document) {
                Ok(rendered) => message = rendered,
                Err(err) => {
                    log::debug!("template did not resolve ({err}); using default message");
                }
            }
        } else {
            log::debug!("content type is not application/json; template ignored");
        }
    }

    Ok(Completion {
        output: Some(message),
        code: rule.exit_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{self, Selector};
    use pretty_assertions::assert_eq;

    fn json_parts(status: u16, line: &str, body: &str) -> ResponseParts {
        ResponseParts {
            status,
            status_line: line.into(),
            content_type: Some("application/json".into()),
            body: body.as_bytes().to_vec(),
        }
    }

    fn plain_parts(status: u16, line: &str, body: &str) -> ResponseParts {
        ResponseParts {
            status,
            status_line: line.into(),
            content_type: Some("text/plain".into()),
            body: body.as_bytes().to_vec(),
        }
    }

    fn rule_for(spec: &str, selector: Selector) -> MappingRule {
        mapping::parse(spec).unwrap().get(selector).unwrap().clone()
    }

    #[test]
    fn test_rule_without_template_uses_default() {
        let rule = rule_for("404=3", Selector::Exact(404));
        let parts = json_parts(404, "404 Not Found", r#"{"message":"gone"}"#);
        let completion = render_rule(&rule, &parts, "404 Not Found".into()).unwrap();
        assert_eq!(completion.output.as_deref(), Some("404 Not Found"));
        assert_eq!(completion.code, 3);
    }

    #[test]
    fn test_template_renders_against_body() {
        let rule = rule_for("200=0:{.message}", Selector::Exact(200));
        let parts = json_parts(200, "200 OK", r#"{"message":"ok"}"#);
        let completion = render_rule(&rule, &parts, String::new()).unwrap();
        assert_eq!(completion.output.as_deref(), Some("ok"));
        assert_eq!(completion.code, 0);
    }

    #[test]
    fn test_template_ignored_for_non_json() {
        let rule = rule_for("404=3:{.message}", Selector::Exact(404));
        let parts = plain_parts(404, "404 Not Found", "<html>gone</html>");
        let completion = render_rule(&rule, &parts, "404 Not Found".into()).unwrap();
        assert_eq!(completion.output.as_deref(), Some("404 Not Found"));
    }

    #[test]
    fn test_decode_failure_is_fatal() {
        let rule = rule_for("200=0:{.message}", Selector::Exact(200));
        let parts = json_parts(200, "200 OK", "{not json");
        let err = render_rule(&rule, &parts, String::new()).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_unresolved_template_falls_back_to_default() {
        let rule = rule_for("200=0:{.missing}", Selector::Exact(200));
        let parts = json_parts(200, "200 OK", "{}");
        let completion = render_rule(&rule, &parts, String::new()).unwrap();
        assert_eq!(completion.output.as_deref(), Some(""));
        assert_eq!(completion.code, 0);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let rule = rule_for("500=2:{.error.detail}", Selector::Exact(500));
        let parts = json_parts(
            500,
            "500 Internal Server Error",
            r#"{"error":{"detail":"db down"}}"#,
        );
        let first = render_rule(&rule, &parts, "500 Internal Server Error".into()).unwrap();
        let second = render_rule(&rule, &parts, "500 Internal Server Error".into()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.output.as_deref(), Some("db down"));
    }
}
