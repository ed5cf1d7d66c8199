//! Toast Stack Component
//!
//! Renders the transient notifications queued in `Toasts`, oldest at the
//! top. Clicking a toast dismisses it early; expiry is driven by the shell.

use dioxus::prelude::*;
use onboard_core::{ToastKind, Toasts};

/// CSS modifier class for a toast kind
pub fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    }
}

/// ARIA role: errors interrupt, successes are announced politely
pub fn toast_role(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "status",
        ToastKind::Error => "alert",
    }
}

#[component]
pub fn ToastStack(toasts: Signal<Toasts>) -> Element {
    let mut toasts = toasts;
    let items: Vec<_> = toasts.read().iter().cloned().collect();

    rsx! {
        div { class: "toast-stack",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: toast_class(toast.kind),
                    role: toast_role(toast.kind),
                    onclick: move |_| {
                        if toasts.write().dismiss(toast.id) {
                            tracing::debug!("Toast {} dismissed", toast.id);
                        }
                    },
                    span { class: "toast-text", "{toast.text}" }
                }
            }
        }
    }
}
