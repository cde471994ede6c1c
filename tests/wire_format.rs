//! Bit-exact payload shapes for all three variants, and the `Serialize`
//! delegation transports rely on when embedding a form in a larger packet.

use formsui::{Button, ButtonImage, CustomForm, Form, ModalForm, SimpleForm};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn simple_form_payload_shape() {
    let form: SimpleForm = SimpleForm::new()
        .with_title("Teleport")
        .with_content("Pick a destination")
        .add_button("Spawn")
        .add_button(Button::new("Shop").with_image(ButtonImage::path("textures/ui/shop")))
        .add_button(Button::new("Wiki").with_image(ButtonImage::url("https://example.com/w.png")));

    assert_eq!(
        form.payload(),
        json!({
            "type": "form",
            "title": "Teleport",
            "content": "Pick a destination",
            "buttons": [
                {"text": "Spawn"},
                {"text": "Shop", "image": {"type": "path", "data": "textures/ui/shop"}},
                {"text": "Wiki", "image": {"type": "url", "data": "https://example.com/w.png"}},
            ],
        })
    );
}

#[test]
fn button_labels_stay_off_the_wire() {
    let form: SimpleForm = SimpleForm::new().add_button(Button::new("Yes").with_label("confirm"));
    assert_eq!(
        form.payload()["buttons"],
        json!([{"text": "Yes"}]),
    );
}

#[test]
fn modal_form_payload_shape() {
    let form: ModalForm = ModalForm::new()
        .with_title("Reset world?")
        .with_content("This cannot be undone.")
        .with_button1("Reset")
        .with_button2("Keep");

    assert_eq!(
        form.payload(),
        json!({
            "type": "modal",
            "title": "Reset world?",
            "content": "This cannot be undone.",
            "button1": "Reset",
            "button2": "Keep",
        })
    );
}

#[test]
fn custom_form_payload_shape() {
    let form: CustomForm = CustomForm::new()
        .with_title("Settings")
        .add_label("Server settings", None)
        .add_toggle("PvP", Some(true), None)
        .add_slider("View distance", 4.0, 32.0, Some(1.0), Some(8.0), None)
        .add_step_slider(
            "Difficulty",
            vec!["easy".to_string(), "hard".to_string()],
            None,
            None,
        )
        .add_dropdown(
            "World",
            vec!["overworld".to_string(), "nether".to_string()],
            Some(0),
            None,
        )
        .add_input("MOTD", "A Minecraft server", None, None);

    assert_eq!(
        form.payload(),
        json!({
            "type": "custom_form",
            "title": "Settings",
            "content": [
                {"type": "label", "text": "Server settings"},
                {"type": "toggle", "text": "PvP", "default": true},
                {
                    "type": "slider",
                    "text": "View distance",
                    "min": 4.0,
                    "max": 32.0,
                    "step": 1.0,
                    "default": 8.0,
                },
                {"type": "step_slider", "text": "Difficulty", "steps": ["easy", "hard"]},
                {
                    "type": "dropdown",
                    "text": "World",
                    "options": ["overworld", "nether"],
                    "default": 0,
                },
                {
                    "type": "input",
                    "text": "MOTD",
                    "placeholder": "A Minecraft server",
                    "default": null,
                },
            ],
        })
    );
}

#[test]
fn unset_optionals_are_omitted_not_nulled() {
    let form: CustomForm = CustomForm::new()
        .add_toggle("PvP", None, None)
        .add_slider("Volume", 0.0, 10.0, None, None, None);

    let content = &form.payload()["content"];
    assert_eq!(content[0], json!({"type": "toggle", "text": "PvP"}));
    assert_eq!(
        content[1],
        json!({"type": "slider", "text": "Volume", "min": 0.0, "max": 10.0})
    );
}

#[test]
fn serialize_delegates_to_payload() {
    let form: ModalForm = ModalForm::new().with_title("Hi").with_button1("Ok");
    assert_eq!(serde_json::to_value(&form).unwrap(), form.payload());

    let menu: SimpleForm = SimpleForm::new().add_button("A");
    assert_eq!(serde_json::to_value(&menu).unwrap(), menu.payload());

    let custom: CustomForm = CustomForm::new().add_toggle("t", None, None);
    let packet = json!({"request_id": 7, "form": serde_json::to_value(&custom).unwrap()});
    assert_eq!(packet["form"], custom.payload());
}
