//! Path-expression evaluation against JSON documents

use super::ast::{PathExpr, Step};
use super::error::EvalError;
use serde_json::Value;

/// Walk a path expression from the root of a JSON document and return
/// the selected value.
pub fn eval(expr: &PathExpr, root: &Value) -> Result<Value, EvalError> {
    let mut current = root;

    for step in &expr.steps {
        current = match step {
            Step::Field(name) => match current {
                Value::Object(map) => {
                    map.get(name).ok_or_else(|| EvalError::PropertyNotFound {
                        property: name.clone(),
                    })?
                }
                other => {
                    return Err(EvalError::TypeMismatch {
                        expected: "object".into(),
                        actual: type_name(other).into(),
                    });
                }
            },
            Step::Index(index) => match current {
                Value::Array(items) => {
                    let resolved = resolve_index(*index, items.len()).ok_or(
                        EvalError::IndexOutOfBounds {
                            index: *index,
                            size: items.len(),
                        },
                    )?;
                    &items[resolved]
                }
                other => {
                    return Err(EvalError::TypeMismatch {
                        expected: "array".into(),
                        actual: type_name(other).into(),
                    });
                }
            },
        };
    }

    Ok(current.clone())
}

/// Render a selected value as message text: strings are emitted bare,
/// everything else in its compact JSON form.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Negative indexes count from the end of the array
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        index.checked_add(len as i64)?
    } else {
        index
    };
    if resolved >= 0 && (resolved as usize) < len {
        Some(resolved as usize)
    } else {
        None
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
