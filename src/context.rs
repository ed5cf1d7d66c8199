//! Context accessors for Onboard.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let client = use_signup_client();
//! let toasts = use_toasts();
//! ```

use dioxus::prelude::*;
use onboard_core::{SignupClient, Toasts};

/// Hook to access the accounts API client.
///
/// The client is provided at launch (`LaunchBuilder::with_context`), so it is
/// available in every component.
pub fn use_signup_client() -> SignupClient {
    use_context::<SignupClient>()
}

/// Hook to access the toast queue.
///
/// Returns the Signal provided by `App`; anything that implements a
/// notification writes into it through `Notifier`.
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}
