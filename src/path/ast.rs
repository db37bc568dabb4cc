//! AST for path expressions

use std::fmt;

/// A parsed path expression: a sequence of steps walked from the root
/// of a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct PathExpr {
    /// The steps to walk, in order
    pub steps: Vec<Step>,
}

/// One step of a path expression
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Object field access (`.name` or `['name']`)
    Field(String),
    /// Array index access (`[0]`); negative indexes count from the end
    Index(i64),
}

impl PathExpr {
    /// An expression with no steps selects the root document itself
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for step in &self.steps {
            match step {
                Step::Field(name) => write!(f, ".{name}")?,
                Step::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        let expr = PathExpr {
            steps: vec![
                Step::Field("items".into()),
                Step::Index(-1),
                Step::Field("name".into()),
            ],
        };
        assert_eq!(expr.to_string(), "$.items[-1].name");
    }

    #[test]
    fn test_root_expression() {
        assert!(PathExpr { steps: vec![] }.is_root());
    }
}
