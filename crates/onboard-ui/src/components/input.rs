//! Input Field Components
//!
//! Controlled text inputs: the value lives in the caller's signal and every
//! keystroke is reported through `oninput`.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Form field name
    pub name: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Browser autocomplete hint (username, email, new-password, ...)
    #[props(default)]
    pub autocomplete: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         placeholder: "Email".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = input_id(&props.name);

    rsx! {
        div { class: "form-field",
            input {
                id: "{id}",
                name: "{props.name}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autocomplete: props.autocomplete.as_deref().unwrap_or("off"),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// DOM id derived from the field name
pub(crate) fn input_id(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("input-{}", slug)
}
