//! Validation failures raised while interpreting client form responses.

use serde_json::Value;
use thiserror::Error;

use crate::descriptor::FieldKey;

/// Error raised when a client response does not match the declared form.
///
/// Every variant is a synchronous validation failure surfaced to the
/// immediate caller. There is no partial success: a response either
/// reconciles completely or produces exactly one of these and no data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// The top-level payload had the wrong JSON type for this form variant.
    #[error("Expected {expected} response, got {actual}")]
    UnexpectedType {
        expected: &'static str,
        actual: &'static str,
    },

    /// A custom-form response carried more values than declared elements.
    #[error("Too many result elements, expected {expected}, got {actual}")]
    TooManyElements { expected: usize, actual: usize },

    /// A short custom-form response matched neither the with-labels count
    /// (clients before 1.21.70) nor the without-labels count (1.21.70 on).
    #[error(
        "Wrong number of result elements, expected either {with_labels} \
         (with label values, <1.21.70) or {without_labels} \
         (without label values, >=1.21.70), got {actual}"
    )]
    WrongElementCount {
        with_labels: usize,
        without_labels: usize,
        actual: usize,
    },

    /// A value failed the acceptance rule of the element it answers.
    #[error("Invalid type given for element {label}")]
    InvalidValue { label: FieldKey },
}

/// Human-readable JSON type name for `got {actual}` error reporting.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
