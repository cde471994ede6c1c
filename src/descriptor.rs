//! Field descriptors: the response key and acceptance rule declared for
//! each content element of a custom form.

use std::fmt;

use serde_json::Value;

/// Key under which a reconciled value is reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// Implicit key: the element's position in declaration order.
    Index(usize),
    /// Explicit label supplied when the element was declared.
    Name(String),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Index(position) => write!(f, "{position}"),
            FieldKey::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for FieldKey {
    fn from(position: usize) -> Self {
        FieldKey::Index(position)
    }
}

impl From<&str> for FieldKey {
    fn from(name: &str) -> Self {
        FieldKey::Name(name.to_string())
    }
}

impl From<String> for FieldKey {
    fn from(name: String) -> Self {
        FieldKey::Name(name)
    }
}

/// Acceptance rule for one declared element, fixed by the element type.
///
/// Nothing is checked at declaration time; a slider declared with
/// `min > max` is taken as given and simply leaves a rule no response value
/// can satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Label elements never carry user data; only `null` is accepted.
    Null,
    /// Toggles answer with a boolean.
    Bool,
    /// Sliders answer with a number inside `[min, max]`, bounds inclusive.
    /// Integer and floating-point responses are both fine.
    Range { min: f64, max: f64 },
    /// Dropdowns and step sliders answer with an integer index into their
    /// `len` declared options.
    Choice { len: usize },
    /// Inputs answer with any string.
    Text,
}

impl Constraint {
    /// Whether `value` satisfies this rule.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Constraint::Null => value.is_null(),
            Constraint::Bool => value.is_boolean(),
            Constraint::Range { min, max } => {
                value.as_f64().is_some_and(|n| *min <= n && n <= *max)
            }
            Constraint::Choice { len } => value
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .is_some_and(|i| i < *len),
            Constraint::Text => value.is_string(),
        }
    }
}

/// One entry of the registry a custom form accumulates in lockstep with its
/// content list.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub label: FieldKey,
    pub constraint: Constraint,
}

impl FieldDescriptor {
    /// The label falls back to the element's `position` when none was
    /// declared.
    pub fn new(position: usize, label: Option<&str>, constraint: Constraint) -> Self {
        let label = match label {
            Some(name) => FieldKey::Name(name.to_string()),
            None => FieldKey::Index(position),
        };
        Self { label, constraint }
    }

    /// Label fields accept only `null` and contribute no entry to the
    /// reconciled data.
    pub fn is_label(&self) -> bool {
        matches!(self.constraint, Constraint::Null)
    }
}
