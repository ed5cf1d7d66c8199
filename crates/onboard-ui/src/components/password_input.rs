//! Password input with a show/hide toggle.

use dioxus::prelude::*;
use onboard_core::VisibilityIcon;

use super::button::IconButton;
use super::icons::{visibility_label, EyeIcon};
use super::input::input_id;

#[derive(Clone, PartialEq, Props)]
pub struct PasswordInputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    pub name: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// `password` while masked, `text` while shown
    pub input_type: &'static str,
    /// Glyph on the toggle
    pub icon: VisibilityIcon,
    /// Called when the eye icon is clicked
    pub on_toggle: EventHandler<()>,
    #[props(default = "new-password".to_string())]
    pub autocomplete: String,
}

/// The visibility state is owned by the caller (`SignupSession`); this
/// component only renders it and reports clicks.
#[component]
pub fn PasswordInput(props: PasswordInputProps) -> Element {
    let id = input_id(&props.name);
    let icon = props.icon;

    rsx! {
        div { class: "form-field password-field",
            input {
                id: "{id}",
                name: "{props.name}",
                class: "input-field input-with-toggle",
                r#type: props.input_type,
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autocomplete: "{props.autocomplete}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            IconButton {
                class: "visibility-toggle".to_string(),
                aria_label: visibility_label(icon).to_string(),
                onclick: move |_| props.on_toggle.call(()),
                EyeIcon { icon }
            }
        }
    }
}
