//! Modal form: a two-button yes/no dialog answered with a boolean.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::error::{json_type_name, FormError};
use crate::forms::{Callback, Form};

/// Yes/no dialog. The client answers `true` for button 1 and `false` for
/// button 2; a modal cannot be dismissed without choosing, so null is as
/// malformed as any other non-boolean.
pub struct ModalForm<P = ()> {
    title: String,
    content: String,
    button1: String,
    button2: String,
    callback: Option<Callback<P, bool>>,
}

impl<P> ModalForm<P> {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            button1: String::new(),
            button2: String::new(),
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

    pub fn with_button1(mut self, text: impl Into<String>) -> Self {
        self.button1 = text.into();
        self
    }

    pub fn with_button2(mut self, text: impl Into<String>) -> Self {
        self.button2 = text.into();
        self
    }

    /// Register the callback run with the chosen boolean after a response
    /// reconciles.
    pub fn on_submit(mut self, callback: impl FnMut(&mut P, bool) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn button1(&self) -> &str {
        &self.button1
    }

    pub fn button2(&self) -> &str {
        &self.button2
    }

    /// Accept exactly a boolean; everything else is a type error.
    pub fn reconcile(&self, response: &Value) -> Result<bool, FormError> {
        response.as_bool().ok_or(FormError::UnexpectedType {
            expected: "a boolean",
            actual: json_type_name(response),
        })
    }
}

impl<P> Form<P> for ModalForm<P> {
    fn payload(&self) -> Value {
        json!({
            "type": "modal",
            "title": self.title,
            "content": self.content,
            "button1": self.button1,
            "button2": self.button2,
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

impl<P> Default for ModalForm<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Serialize for ModalForm<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload().serialize(serializer)
    }
}
