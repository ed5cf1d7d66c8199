//! Button Components
//!
//! - Button: the main form action (e.g. "Create Account")
//! - IconButton: compact inline control that never submits the form

use dioxus::prelude::*;

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Primary action button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         button_type: "submit".to_string(),
///         disabled: submitting(),
///         "Create Account"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes("btn-primary", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            {props.children}
        }
    }
}

/// Icon button for compact actions (visibility toggle, close, ...)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            // Never submits the surrounding form
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
