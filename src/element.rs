//! Custom-form content elements in their exact wire shape.

use serde::Serialize;

/// One entry of a custom form's content list.
///
/// The serialized shape is what the client parses, so the tag values and
/// attribute names here are wire-exact. Optional attributes marked
/// `skip_serializing_if` disappear from the payload entirely when unset;
/// the rest are sent as `null`.
///
/// Ordering in the content list is significant: the reconciler maps
/// response values back onto elements by position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Display-only text. Never answered by the user; clients from 1.21.70
    /// on omit its slot from the response array altogether.
    Label { text: String },
    Toggle {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<bool>,
    },
    Slider {
        text: String,
        min: f64,
        max: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<f64>,
    },
    StepSlider {
        text: String,
        steps: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<usize>,
    },
    Dropdown {
        text: String,
        options: Vec<String>,
        default: Option<usize>,
    },
    Input {
        text: String,
        placeholder: String,
        default: Option<String>,
    },
}

impl Element {
    /// Label elements are the ones newer clients drop from responses.
    pub fn is_label(&self) -> bool {
        matches!(self, Element::Label { .. })
    }
}
