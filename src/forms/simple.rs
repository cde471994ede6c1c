//! Button-menu form: a list of captioned buttons answered by index.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use tracing::trace;

use crate::error::{json_type_name, FormError};
use crate::forms::{Callback, Form};

/// Icon source for a menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    /// Texture path inside the client's resource pack.
    Path,
    /// Remote URL fetched by the client.
    Url,
}

/// Optional button icon, serialized as `{"type": .., "data": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonImage {
    #[serde(rename = "type")]
    kind: ImageKind,
    data: String,
}

impl ButtonImage {
    pub fn path(data: impl Into<String>) -> Self {
        Self {
            kind: ImageKind::Path,
            data: data.into(),
        }
    }

    pub fn url(data: impl Into<String>) -> Self {
        Self {
            kind: ImageKind::Url,
            data: data.into(),
        }
    }
}

/// One menu button. The response label defaults to the caption text; an
/// explicit label distinguishes buttons that share a caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<ButtonImage>,
    #[serde(skip)]
    label: Option<String>,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
            label: None,
        }
    }

    pub fn with_image(mut self, image: ButtonImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The label a click on this button resolves to.
    pub fn response_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.text)
    }
}

impl From<&str> for Button {
    fn from(text: &str) -> Self {
        Button::new(text)
    }
}

/// Menu-of-buttons form. The client answers with the clicked button's
/// index, or null when the menu is closed.
pub struct SimpleForm<P = ()> {
    title: String,
    content: String,
    buttons: Vec<Button>,
    callback: Option<Callback<P, Option<String>>>,
}

impl<P> SimpleForm<P> {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            buttons: Vec::new(),
            callback: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn add_button(mut self, button: impl Into<Button>) -> Self {
        self.buttons.push(button.into());
        self
    }

    /// Register the callback run after a response reconciles. It receives
    /// the clicked button's label, or `None` when the menu was closed or
    /// the index did not match a declared button.
    pub fn on_submit(mut self, callback: impl FnMut(&mut P, Option<String>) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Resolve a raw response to the clicked button's label.
    ///
    /// Only a top-level array is a type error: any non-array scalar that is
    /// not a declared button index (null, out of range, negative, string)
    /// resolves to `None` without failing.
    pub fn reconcile(&self, response: &Value) -> Result<Option<String>, FormError> {
        if response.is_array() {
            return Err(FormError::UnexpectedType {
                expected: "a button index",
                actual: json_type_name(response),
            });
        }
        if response.is_null() {
            trace!("menu closed without a choice");
            return Ok(None);
        }
        let label = response
            .as_u64()
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| self.buttons.get(index))
            .map(|button| button.response_label().to_string());
        Ok(label)
    }
}

impl<P> Form<P> for SimpleForm<P> {
    fn payload(&self) -> Value {
        json!({
            "type": "form",
            "title": self.title,
            "content": self.content,
            "buttons": self.buttons,
        })
    }

    fn handle_response(&mut self, player: &mut P, response: Value) -> Result<(), FormError> {
        let choice = self.reconcile(&response)?;
        if let Some(callback) = self.callback.as_mut() {
            callback(player, choice);
        }
        Ok(())
    }
}

impl<P> Default for SimpleForm<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Serialize for SimpleForm<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload().serialize(serializer)
    }
}
