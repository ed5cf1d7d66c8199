//! Onboard UI Components
//!
//! Dioxus components for the account screens: text inputs, the password
//! input with its visibility toggle, buttons and the toast stack.
//!
//! Styling lives in the desktop shell's global stylesheet; components only
//! emit class names (`input-field`, `btn-primary`, `toast toast-error`, ...).

pub mod components;

pub use components::*;
