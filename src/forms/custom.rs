//! Custom form: an ordered list of input elements, and the reconciler that
//! maps the client's flat response array back onto named fields.

use std::cmp::Ordering;

use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use tracing::{debug, trace};

use crate::descriptor::{Constraint, FieldDescriptor, FieldKey};
use crate::element::Element;
use crate::error::{json_type_name, FormError};
use crate::forms::{Callback, Form};

/// Reconciled custom-form response: one `(key, value)` entry per non-label
/// element, in element order.
///
/// Values are passed through exactly as the client sent them, already
/// checked against each element's [`Constraint`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomFormData {
    entries: Vec<(FieldKey, Value)>,
}

impl CustomFormData {
    /// Look up a value by its declared label.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find_map(|(key, value)| match key {
            FieldKey::Name(label) if label == name => Some(value),
            _ => None,
        })
    }

    /// Look up a value declared without a label by its element position.
    pub fn get_index(&self, position: usize) -> Option<&Value> {
        self.entries.iter().find_map(|(key, value)| match key {
            FieldKey::Index(index) if *index == position => Some(value),
            _ => None,
        })
    }

    /// All entries in element order.
    pub fn entries(&self) -> &[(FieldKey, Value)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Multi-element form. The client answers with an array of values in
/// element order, or null when the form is closed.
///
/// Content elements and field descriptors are accumulated in lockstep, one
/// descriptor per element, so positions always line up by construction.
pub struct CustomForm<P = ()> {
    title: String,
    content: Vec<Element>,
    fields: Vec<FieldDescriptor>,
    callback: Option<Callback<P, Option<CustomFormData>>>,
}

impl<P> CustomForm<P> {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: Vec::new(),
            fields: Vec::new(),
            callback: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn push(&mut self, element: Element, constraint: Constraint, label: Option<&str>) {
        let position = self.content.len();
        self.content.push(element);
        self.fields
            .push(FieldDescriptor::new(position, label, constraint));
    }

    /// Display-only text. Occupies a response slot on clients before
    /// 1.21.70 and none on later ones; either way it never carries data.
    pub fn add_label(mut self, text: impl Into<String>, label: Option<&str>) -> Self {
        self.push(Element::Label { text: text.into() }, Constraint::Null, label);
        self
    }

    pub fn add_toggle(
        mut self,
        text: impl Into<String>,
        default: Option<bool>,
        label: Option<&str>,
    ) -> Self {
        self.push(
            Element::Toggle {
                text: text.into(),
                default,
            },
            Constraint::Bool,
            label,
        );
        self
    }

    /// `min`/`max` are taken as given; a slider declared with `min > max`
    /// is only caught when a response value fails the range check.
    pub fn add_slider(
        mut self,
        text: impl Into<String>,
        min: f64,
        max: f64,
        step: Option<f64>,
        default: Option<f64>,
        label: Option<&str>,
    ) -> Self {
        self.push(
            Element::Slider {
                text: text.into(),
                min,
                max,
                step,
                default,
            },
            Constraint::Range { min, max },
            label,
        );
        self
    }

    pub fn add_step_slider(
        mut self,
        text: impl Into<String>,
        steps: Vec<String>,
        default: Option<usize>,
        label: Option<&str>,
    ) -> Self {
        let len = steps.len();
        self.push(
            Element::StepSlider {
                text: text.into(),
                steps,
                default,
            },
            Constraint::Choice { len },
            label,
        );
        self
    }

    pub fn add_dropdown(
        mut self,
        text: impl Into<String>,
        options: Vec<String>,
        default: Option<usize>,
        label: Option<&str>,
    ) -> Self {
        let len = options.len();
        self.push(
            Element::Dropdown {
                text: text.into(),
                options,
                default,
            },
            Constraint::Choice { len },
            label,
        );
        self
    }

    pub fn add_input(
        mut self,
        text: impl Into<String>,
        placeholder: impl Into<String>,
        default: Option<String>,
        label: Option<&str>,
    ) -> Self {
        self.push(
            Element::Input {
                text: text.into(),
                placeholder: placeholder.into(),
                default,
            },
            Constraint::Text,
            label,
        );
        self
    }

    /// Register the callback run after a response reconciles. It receives
    /// `Some(data)` for a submitted form and `None` for a closed one.
    pub fn on_submit(
        mut self,
        callback: impl FnMut(&mut P, Option<CustomFormData>) + 'static,
    ) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[Element] {
        &self.content
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Map a raw response onto the declared fields.
    ///
    /// Accepts both wire generations transparently: a full-length array
    /// with null placeholders in the label slots (clients before 1.21.70)
    /// and the shorter array that omits label slots (1.21.70 on). The two
    /// reconcile to identical data. Null means the form was closed.
    pub fn reconcile(&self, response: Value) -> Result<Option<CustomFormData>, FormError> {
        let values = match response {
            Value::Null => {
                trace!("custom form closed without a response");
                return Ok(None);
            }
            Value::Array(values) => values,
            other => {
                return Err(FormError::UnexpectedType {
                    expected: "an array",
                    actual: json_type_name(&other),
                });
            }
        };

        let expected = self.fields.len();
        let values = match values.len().cmp(&expected) {
            Ordering::Greater => {
                return Err(FormError::TooManyElements {
                    expected,
                    actual: values.len(),
                });
            }
            Ordering::Equal => values,
            Ordering::Less => self.restore_label_slots(values)?,
        };
        assert_eq!(
            values.len(),
            expected,
            "restored response length diverged from the field registry"
        );

        let mut entries = Vec::new();
        for (position, value) in values.into_iter().enumerate() {
            let field = self
                .fields
                .get(position)
                .unwrap_or_else(|| panic!("no field declared at position {position}"));
            if !field.constraint.accepts(&value) {
                return Err(FormError::InvalidValue {
                    label: field.label.clone(),
                });
            }
            if !field.is_label() {
                entries.push((field.label.clone(), value));
            }
        }
        Ok(Some(CustomFormData { entries }))
    }

    /// Rebuild a full-length response array from one a ≥1.21.70 client
    /// sent without label slots.
    ///
    /// Fail-fast on length: a short response must match the non-label
    /// count exactly, anything else is rejected with both expected counts.
    /// No partial mapping is attempted for lengths between the two.
    fn restore_label_slots(&self, values: Vec<Value>) -> Result<Vec<Value>, FormError> {
        let positions: Vec<usize> = self
            .content
            .iter()
            .enumerate()
            .filter(|(_, element)| !element.is_label())
            .map(|(position, _)| position)
            .collect();

        if values.len() != positions.len() {
            return Err(FormError::WrongElementCount {
                with_labels: self.fields.len(),
                without_labels: positions.len(),
                actual: values.len(),
            });
        }

        debug!(
            declared = self.fields.len(),
            received = values.len(),
            "restoring label slots omitted by the client"
        );

        let mut full = vec![Value::Null; self.fields.len()];
        for (offset, value) in values.into_iter().enumerate() {
            let position = *positions
                .get(offset)
                .unwrap_or_else(|| panic!("no element position mapped for response offset {offset}"));
            full[position] = value;
        }
        Ok(full)
    }
}

impl<P> Form<P> for CustomForm<P> {
    fn payload(&self) -> Value {
        json!({
            "type": "custom_form",
            "title": self.title,
            "content": self.content,
        })
    }

    fn handle_response(&mut self, player: &mut P, response: Value) -> Result<(), FormError> {
        let data = self.reconcile(response)?;
        if let Some(callback) = self.callback.as_mut() {
            callback(player, data);
        }
        Ok(())
    }
}

impl<P> Default for CustomForm<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Serialize for CustomForm<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload().serialize(serializer)
    }
}
