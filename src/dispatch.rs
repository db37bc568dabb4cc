//! Response classification and rule dispatch
//!
//! Selection order is an explicit contract: an exact-code rule always
//! wins over a class wildcard. Codes outside 200-599 only ever match
//! exactly; there is no wildcard for them.

use crate::http::ResponseParts;
use crate::mapping::{MappingRule, MappingTable, Selector};

/// The outcome of classifying a response against the mapping table
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition<'a> {
    /// Ordinary success: emit nothing, exit 0
    NoAction,
    /// No rule and no applicable wildcard: report and exit 1
    Unmapped {
        /// Numeric status code
        status: u16,
        /// Status line for the diagnostic
        status_line: String,
    },
    /// A rule matched; the renderer takes over
    Matched {
        /// The selected rule
        rule: &'a MappingRule,
        /// Message to use when the rule has no template or the
        /// template does not resolve
        default_message: String,
    },
}

/// Select the applicable rule for a response, in priority order:
/// exact code, then class wildcard, then the per-class default.
pub fn dispatch<'a>(parts: &ResponseParts, table: &'a MappingTable) -> Disposition<'a> {
    let status = parts.status;
    let success = (200..=299).contains(&status);
    let default_message = if success {
        String::new()
    } else {
        parts.status_line.clone()
    };

    if let Some(rule) = table.get(Selector::Exact(i64::from(status))) {
        log::debug!("status {status} matched exact rule");
        return Disposition::Matched {
            rule,
            default_message,
        };
    }

    let class = match status {
        200..=299 => Some(Selector::Class2xx),
        400..=499 => Some(Selector::Class4xx),
        500..=599 => Some(Selector::Class5xx),
        _ => None,
    };

    if let Some(selector) = class {
        if let Some(rule) = table.get(selector) {
            log::debug!("status {status} matched {selector} rule");
            return Disposition::Matched {
                rule,
                default_message,
            };
        }
    }

    if success {
        Disposition::NoAction
    } else {
        Disposition::Unmapped {
            status,
            status_line: parts.status_line.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping;
    use rstest::rstest;

    fn parts(status: u16, status_line: &str) -> ResponseParts {
        ResponseParts {
            status,
            status_line: status_line.into(),
            content_type: None,
            body: Vec::new(),
        }
    }

    fn exit_code(disposition: &Disposition<'_>) -> Option<i32> {
        match disposition {
            Disposition::Matched { rule, .. } => Some(rule.exit_code),
            _ => None,
        }
    }

    #[test]
    fn test_exact_match_beats_wildcard() {
        let table = mapping::parse("404=1;4XX=2").unwrap();
        let selected = dispatch(&parts(404, "404 Not Found"), &table);
        assert_eq!(exit_code(&selected), Some(1));

        let selected = dispatch(&parts(403, "403 Forbidden"), &table);
        assert_eq!(exit_code(&selected), Some(2));
    }

    #[rstest]
    #[case(200, "200 OK")]
    #[case(204, "204 No Content")]
    #[case(299, "299")]
    fn test_success_without_rule_is_no_action(#[case] status: u16, #[case] line: &str) {
        let table = mapping::parse("").unwrap();
        assert_eq!(dispatch(&parts(status, line), &table), Disposition::NoAction);
    }

    #[test]
    fn test_success_wildcard_applies() {
        let table = mapping::parse("2XX=7").unwrap();
        let selected = dispatch(&parts(201, "201 Created"), &table);
        assert_eq!(exit_code(&selected), Some(7));
        match selected {
            Disposition::Matched {
                default_message, ..
            } => assert_eq!(default_message, ""),
            other => panic!("unexpected disposition: {other:?}"),
        }
    }

    #[test]
    fn test_error_default_message_is_status_line() {
        let table = mapping::parse("5XX=2").unwrap();
        match dispatch(&parts(503, "503 Service Unavailable"), &table) {
            Disposition::Matched {
                default_message, ..
            } => assert_eq!(default_message, "503 Service Unavailable"),
            other => panic!("unexpected disposition: {other:?}"),
        }
    }

    #[rstest]
    #[case(301, "301 Moved Permanently")]
    #[case(404, "404 Not Found")]
    #[case(500, "500 Internal Server Error")]
    #[case(101, "101 Switching Protocols")]
    fn test_unmapped_errors(#[case] status: u16, #[case] line: &str) {
        let table = mapping::parse("").unwrap();
        assert_eq!(
            dispatch(&parts(status, line), &table),
            Disposition::Unmapped {
                status,
                status_line: line.into(),
            }
        );
    }

    #[test]
    fn test_no_wildcard_for_redirects() {
        // 3xx codes match exactly or not at all
        let table = mapping::parse("2XX=0;4XX=1;5XX=2").unwrap();
        assert!(matches!(
            dispatch(&parts(302, "302 Found"), &table),
            Disposition::Unmapped { status: 302, .. }
        ));

        let table = mapping::parse("301=4").unwrap();
        let selected = dispatch(&parts(301, "301 Moved Permanently"), &table);
        assert_eq!(exit_code(&selected), Some(4));
    }

    #[test]
    fn test_exact_match_outside_real_ranges() {
        let table = mapping::parse("599=9").unwrap();
        let selected = dispatch(&parts(599, "599"), &table);
        assert_eq!(exit_code(&selected), Some(9));
    }
}
