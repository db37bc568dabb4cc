//! Response mapping: selectors, rules and the mapping table
//!
//! A mapping table associates status-code selectors with an exit code
//! and an optional message template. It is built once from the `-r`
//! specification and only read afterwards.

pub mod error;
pub mod parser;

pub use error::MappingError;
pub use parser::parse;

use crate::template::Template;
use std::collections::HashMap;
use std::fmt;

/// Which HTTP status codes a rule applies to. Exact selectors accept
/// any integer, not just real status codes; matching is numeric, so
/// `007` and `7` name the same selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// One exact status code
    Exact(i64),
    /// Any code in 200..=299
    Class2xx,
    /// Any code in 400..=499
    Class4xx,
    /// Any code in 500..=599
    Class5xx,
}

impl Selector {
    /// Parse a selector: `2XX`, `4XX`, `5XX`, or a decimal integer
    pub fn parse(text: &str) -> Result<Self, MappingError> {
        match text {
            "2XX" => Ok(Selector::Class2xx),
            "4XX" => Ok(Selector::Class4xx),
            "5XX" => Ok(Selector::Class5xx),
            other => other
                .parse::<i64>()
                .map(Selector::Exact)
                .map_err(|_| MappingError::InvalidSelector {
                    selector: other.to_string(),
                }),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Exact(code) => write!(f, "{code}"),
            Selector::Class2xx => write!(f, "2XX"),
            Selector::Class4xx => write!(f, "4XX"),
            Selector::Class5xx => write!(f, "5XX"),
        }
    }
}

/// The exit code and optional message template for one selector
#[derive(Debug, Clone, PartialEq)]
pub struct MappingRule {
    /// Process exit code to terminate with when the rule matches
    pub exit_code: i32,
    /// Message template; `None` means "emit the default message"
    pub template: Option<Template>,
}

/// The parsed, validated set of mapping rules for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingTable {
    rules: HashMap<Selector, MappingRule>,
}

impl MappingTable {
    /// Create an empty table (the no-custom-mapping default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rules in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up the rule for a selector
    pub fn get(&self, selector: Selector) -> Option<&MappingRule> {
        self.rules.get(&selector)
    }

    /// Insert a rule, returning the previous rule for the selector if
    /// one existed (later definitions overwrite earlier ones).
    pub(crate) fn insert(&mut self, selector: Selector, rule: MappingRule) -> Option<MappingRule> {
        self.rules.insert(selector, rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_wildcards() {
        assert_eq!(Selector::parse("2XX").unwrap(), Selector::Class2xx);
        assert_eq!(Selector::parse("4XX").unwrap(), Selector::Class4xx);
        assert_eq!(Selector::parse("5XX").unwrap(), Selector::Class5xx);
    }

    #[test]
    fn test_selector_exact() {
        assert_eq!(Selector::parse("404").unwrap(), Selector::Exact(404));
        // no range validation beyond integer parseability
        assert_eq!(Selector::parse("999").unwrap(), Selector::Exact(999));
        assert_eq!(Selector::parse("42").unwrap(), Selector::Exact(42));
    }

    #[test]
    fn test_selector_is_case_sensitive() {
        assert_eq!(
            Selector::parse("2xx"),
            Err(MappingError::InvalidSelector {
                selector: "2xx".into(),
            })
        );
    }

    #[test]
    fn test_invalid_selector() {
        assert_eq!(
            Selector::parse("9XX"),
            Err(MappingError::InvalidSelector {
                selector: "9XX".into(),
            })
        );
    }

    #[test]
    fn test_leading_zeros_match_numerically() {
        assert_eq!(Selector::parse("007").unwrap(), Selector::Exact(7));
    }

    #[test]
    fn test_table_insert_returns_previous() {
        let mut table = MappingTable::new();
        let first = MappingRule {
            exit_code: 1,
            template: None,
        };
        let second = MappingRule {
            exit_code: 2,
            template: None,
        };
        assert!(table.insert(Selector::Exact(404), first.clone()).is_none());
        assert_eq!(
            table.insert(Selector::Exact(404), second),
            Some(first)
        );
        assert_eq!(table.len(), 1);
    }
}
