//! Builder and response-validation layer for Bedrock-style UI forms.
//!
//! Three variants cover everything the client can render:
//!
//! - [`SimpleForm`] — a menu of captioned buttons, answered with the index
//!   of the clicked button.
//! - [`ModalForm`] — a two-button yes/no dialog, answered with a boolean.
//! - [`CustomForm`] — an ordered list of input elements (labels, toggles,
//!   sliders, dropdowns, text inputs), answered with an array of values in
//!   element order.
//!
//! A form is built once with chained setters, serialized through
//! [`Form::payload`] and shipped to the client by an external transport. The
//! decoded response comes back as a [`serde_json::Value`] and is reconciled
//! against the declared elements before the registered callback runs; a
//! response that does not match the declaration surfaces a [`FormError`]
//! instead.
//!
//! Custom forms additionally compensate for a client-side quirk: clients
//! from 1.21.70 on no longer echo `null` placeholders for display-only
//! label elements, so their response arrays are shorter than the element
//! list. [`CustomForm::reconcile`] realigns such responses transparently —
//! old and new wire behavior produce identical results.

mod descriptor;
mod element;
mod error;
mod forms;

pub use descriptor::{Constraint, FieldDescriptor, FieldKey};
pub use element::Element;
pub use error::FormError;
pub use forms::{
    Button, ButtonImage, Callback, CustomForm, CustomFormData, Form, ImageKind, ModalForm,
    SimpleForm,
};
