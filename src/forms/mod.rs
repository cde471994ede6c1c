//! The three form variants and the trait a transport drives them through.

mod custom;
mod modal;
mod simple;

pub use custom::{CustomForm, CustomFormData};
pub use modal::ModalForm;
pub use simple::{Button, ButtonImage, ImageKind, SimpleForm};

use serde_json::Value;

use crate::error::FormError;

/// Callback invoked with the responder and the reconciled response.
///
/// `FnMut` rather than `FnOnce`: one form instance may be sent to several
/// responders and dispatched once per response. No `Send`/`Sync` bounds —
/// forms are built, sent, and reconciled on one thread.
pub type Callback<P, R> = Box<dyn FnMut(&mut P, R)>;

/// Transport-facing surface shared by all form variants.
///
/// Dyn-compatible so a transport can keep heterogeneous pending forms as
/// `Box<dyn Form<P>>` keyed by whatever request id it assigns. `P` is the
/// responding party (a player session, usually); it defaults to `()` so the
/// crate stays transport-agnostic.
pub trait Form<P = ()> {
    /// The serializable description sent to the client.
    fn payload(&self) -> Value;

    /// Reconcile `response` against the declaration and, on success, run
    /// the registered callback with `player`. The callback never runs for
    /// a rejected response.
    fn handle_response(&mut self, player: &mut P, response: Value) -> Result<(), FormError>;
}
