//! Per-page sign-up state and the submit state machine.
//!
//! ```text
//! Idle --submit--> (validate) --fail--> Invalid --input--> Idle
//!                      |
//!                      +--pass--> Submitting --200--> Succeeded (navigate)
//!                                     |
//!                                     +--error--> Failed --input--> Idle
//! ```
//!
//! A submit while `Submitting` is ignored, so at most one request is in
//! flight per page.

use crate::client::SignupApi;
use crate::error::{SignupError, SignupResult};
use crate::form::{SignupForm, SignupRequest};
use crate::notify::Notifier;
use crate::validation::validate_form;

/// Where the user is sent after a successful signup.
pub const LOGIN_ROUTE: &str = "/login";

pub const SUCCESS_MESSAGE: &str = "Signup successful!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Last attempt failed client-side validation
    Invalid,
    /// Request sent, waiting for the API
    Submitting,
    Succeeded,
    /// Last request was rejected or never reached the API
    Failed,
}

/// Icon shown on the password visibility toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityIcon {
    /// Password is masked; clicking reveals it
    Eye,
    /// Password is shown; clicking masks it
    EyeSlash,
}

/// Result of the synchronous half of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// Validation passed; send this request and feed the result to
    /// [`SignupSession::complete_submit`].
    Send(SignupRequest),
    /// Nothing to send.
    Done(SubmitOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blocked by client-side validation, no request issued
    Invalid(SignupError),
    /// A request is already pending, this submit was dropped
    InFlight,
    /// Account created; the caller should navigate to `redirect_to`
    Succeeded { redirect_to: &'static str },
    /// The API rejected the request or could not be reached
    Failed(SignupError),
}

#[derive(Debug, Clone, Default)]
pub struct SignupSession {
    phase: SubmitPhase,
    password_visible: bool,
    error_message: Option<String>,
}

impl SignupSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Inline error text from the last failed validation.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    pub fn visibility_icon(&self) -> VisibilityIcon {
        if self.password_visible {
            VisibilityIcon::EyeSlash
        } else {
            VisibilityIcon::Eye
        }
    }

    /// Called whenever an input changes. The inline error text is kept until
    /// the next submit.
    pub fn on_input_change(&mut self) {
        if matches!(self.phase, SubmitPhase::Invalid | SubmitPhase::Failed) {
            self.phase = SubmitPhase::Idle;
        }
    }

    /// Validate the form and decide whether a request should go out.
    ///
    /// Validation failures update both the inline error and the notifier.
    /// When validation passes the inline error is left as it was.
    pub fn begin_submit(&mut self, form: &SignupForm, notifier: &mut impl Notifier) -> SubmitStep {
        if self.is_submitting() {
            tracing::debug!("Signup already in flight, ignoring submit");
            return SubmitStep::Done(SubmitOutcome::InFlight);
        }

        match validate_form(form) {
            Ok(()) => {
                self.phase = SubmitPhase::Submitting;
                SubmitStep::Send(form.to_request())
            }
            Err(err) => {
                tracing::debug!("Signup form invalid: {}", err);
                self.error_message = err.inline_message();
                notifier.notify_error(&err.notification_text());
                self.phase = SubmitPhase::Invalid;
                SubmitStep::Done(SubmitOutcome::Invalid(err))
            }
        }
    }

    /// Apply the API result of a request started by [`begin_submit`].
    ///
    /// Failures only raise a notification; the inline error is not touched.
    ///
    /// [`begin_submit`]: SignupSession::begin_submit
    pub fn complete_submit(
        &mut self,
        result: SignupResult<()>,
        notifier: &mut impl Notifier,
    ) -> SubmitOutcome {
        if !self.is_submitting() {
            tracing::warn!("Signup result arrived in phase {:?}", self.phase);
        }

        match result {
            Ok(()) => {
                notifier.notify_success(SUCCESS_MESSAGE);
                self.phase = SubmitPhase::Succeeded;
                SubmitOutcome::Succeeded {
                    redirect_to: LOGIN_ROUTE,
                }
            }
            Err(err) => {
                notifier.notify_error(&err.notification_text());
                self.phase = SubmitPhase::Failed;
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Full submit in one call, for callers that can hold the session across
    /// the request.
    pub async fn submit<A, N>(&mut self, form: &SignupForm, api: &A, notifier: &mut N) -> SubmitOutcome
    where
        A: SignupApi,
        N: Notifier,
    {
        match self.begin_submit(form, notifier) {
            SubmitStep::Send(request) => {
                let result = api.signup(&request).await;
                self.complete_submit(result, notifier)
            }
            SubmitStep::Done(outcome) => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{ToastKind, Toasts};

    fn valid_form() -> SignupForm {
        SignupForm::new("alice", "alice@example.com", "Passw0rd", "Passw0rd")
    }

    #[test]
    fn test_toggle_twice_restores_mask() {
        let mut session = SignupSession::new();
        assert_eq!(session.password_input_type(), "password");
        assert_eq!(session.visibility_icon(), VisibilityIcon::Eye);

        session.toggle_password_visibility();
        assert_eq!(session.password_input_type(), "text");
        assert_eq!(session.visibility_icon(), VisibilityIcon::EyeSlash);

        session.toggle_password_visibility();
        assert_eq!(session.password_input_type(), "password");
        assert_eq!(session.visibility_icon(), VisibilityIcon::Eye);
    }

    #[test]
    fn test_invalid_form_sets_error_and_toast() {
        let mut session = SignupSession::new();
        let mut toasts = Toasts::default();
        let form = SignupForm::new("alice", "alice", "Passw0rd", "Passw0rd");

        let step = session.begin_submit(&form, &mut toasts);

        assert_eq!(
            step,
            SubmitStep::Done(SubmitOutcome::Invalid(SignupError::InvalidEmail))
        );
        assert_eq!(session.error_message(), Some("Invalid email address"));
        assert_eq!(session.phase(), SubmitPhase::Invalid);
        let toast = toasts.iter().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.text, "Invalid email address");
    }

    #[test]
    fn test_second_submit_while_in_flight_is_dropped() {
        let mut session = SignupSession::new();
        let mut toasts = Toasts::default();

        assert!(matches!(
            session.begin_submit(&valid_form(), &mut toasts),
            SubmitStep::Send(_)
        ));
        assert_eq!(
            session.begin_submit(&valid_form(), &mut toasts),
            SubmitStep::Done(SubmitOutcome::InFlight)
        );
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_input_change_returns_to_idle() {
        let mut session = SignupSession::new();
        let mut toasts = Toasts::default();
        let form = SignupForm::new("alice", "alice@example.com", "Passw0rd", "nope");

        session.begin_submit(&form, &mut toasts);
        assert_eq!(session.phase(), SubmitPhase::Invalid);

        session.on_input_change();
        assert_eq!(session.phase(), SubmitPhase::Idle);
        // Error text stays until the next submit
        assert_eq!(session.error_message(), Some("Passwords do not match"));
    }

    #[test]
    fn test_input_change_does_not_cancel_pending_request() {
        let mut session = SignupSession::new();
        let mut toasts = Toasts::default();

        session.begin_submit(&valid_form(), &mut toasts);
        session.on_input_change();
        assert!(session.is_submitting());
    }

    #[test]
    fn test_complete_failure_keeps_inline_error() {
        let mut session = SignupSession::new();
        let mut toasts = Toasts::default();

        let bad = SignupForm::new("alice", "alice@example.com", "Passw0rd", "other");
        session.begin_submit(&bad, &mut toasts);
        session.begin_submit(&valid_form(), &mut toasts);

        let outcome = session.complete_submit(
            Err(SignupError::Network("connection refused".into())),
            &mut toasts,
        );

        assert!(matches!(outcome, SubmitOutcome::Failed(SignupError::Network(_))));
        assert_eq!(session.phase(), SubmitPhase::Failed);
        assert_eq!(session.error_message(), Some("Passwords do not match"));
        assert_eq!(
            toasts.iter().last().unwrap().text,
            "An error occurred during signup"
        );
    }
}
