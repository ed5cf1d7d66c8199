//! Onboard Core Library
//!
//! Headless logic behind the sign-up form: the form model, client-side
//! validation, the per-attempt submit state machine, the HTTP client for the
//! accounts API and the toast queue used for transient notifications.
//!
//! ## Quick Start
//!
//! ```ignore
//! use onboard_core::{ClientConfig, SignupClient, SignupForm, SignupSession, Toasts};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SignupClient::new(ClientConfig::new("http://localhost:3000")?)?;
//!     let mut session = SignupSession::new();
//!     let mut toasts = Toasts::default();
//!
//!     let form = SignupForm::new("alice", "alice@example.com", "Passw0rd", "Passw0rd");
//!     let outcome = session.submit(&form, &client, &mut toasts).await;
//!     println!("{:?}", outcome);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod notify;
pub mod session;
pub mod validation;

// Re-exports
pub use client::{SignupApi, SignupClient};
pub use config::{ClientConfig, DEFAULT_API_BASE_URL, SIGNUP_PATH};
pub use error::{SignupError, SignupResult, GENERIC_FAILURE_MESSAGE};
pub use form::{SignupField, SignupForm, SignupRequest};
pub use notify::{Notifier, Toast, ToastKind, Toasts, DEFAULT_TOAST_TTL};
pub use session::{
    SignupSession, SubmitOutcome, SubmitPhase, SubmitStep, VisibilityIcon, LOGIN_ROUTE,
    SUCCESS_MESSAGE,
};
