//! Shell-level components for Onboard.

mod toast_host;

pub use toast_host::ToastHost;
