//! Modal validation and dispatch.

mod common;

use formsui::{Form, FormError, ModalForm};
use serde_json::{json, Value};

use common::{init_tracing, TestPlayer};

fn confirm_dialog() -> ModalForm<TestPlayer> {
    ModalForm::new()
        .with_title("Reset world?")
        .with_content("This cannot be undone.")
        .with_button1("Reset")
        .with_button2("Keep")
}

#[test]
fn booleans_reconcile_to_themselves() {
    init_tracing();
    let form = confirm_dialog();
    assert_eq!(form.reconcile(&json!(true)), Ok(true));
    assert_eq!(form.reconcile(&json!(false)), Ok(false));
}

#[test]
fn string_response_is_a_type_error() {
    assert_eq!(
        confirm_dialog().reconcile(&json!("yes")).unwrap_err(),
        FormError::UnexpectedType {
            expected: "a boolean",
            actual: "string",
        }
    );
}

#[test]
fn null_is_rejected_like_any_other_non_boolean() {
    assert_eq!(
        confirm_dialog().reconcile(&Value::Null).unwrap_err(),
        FormError::UnexpectedType {
            expected: "a boolean",
            actual: "null",
        }
    );
}

#[test]
fn callback_receives_the_choice() {
    let mut player = TestPlayer::named("Steve");
    let mut form =
        confirm_dialog().on_submit(|player, choice| player.received.push(choice.to_string()));

    form.handle_response(&mut player, json!(true)).unwrap();
    form.handle_response(&mut player, json!(false)).unwrap();
    assert_eq!(player.received, vec!["true", "false"]);
}

#[test]
fn rejected_response_never_dispatches() {
    let mut player = TestPlayer::default();
    let mut form =
        confirm_dialog().on_submit(|player, _| player.received.push("called".to_string()));
    assert!(form.handle_response(&mut player, json!(1)).is_err());
    assert!(player.received.is_empty());
}
