//! Sign-up page - account creation form.
//!
//! Validation, notifications and the in-flight guard live in
//! `SignupSession`; this page wires it to inputs, the API client and the
//! router.

use dioxus::prelude::*;
use onboard_core::{
    SignupApi, SignupField, SignupForm, SignupSession, SubmitOutcome, SubmitStep,
};
use onboard_ui::{Button, Input, PasswordInput};

use crate::app::Route;
use crate::context::{use_signup_client, use_toasts};

/// Build an `oninput` handler that stores one field and resets the
/// per-attempt state.
fn field_input(
    mut form: Signal<SignupForm>,
    mut session: Signal<SignupSession>,
    field: SignupField,
) -> impl FnMut(String) + 'static {
    move |value| {
        form.write().set(field, value);
        session.write().on_input_change();
    }
}

fn navigate_to(navigator: Navigator, path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator.push(route);
        }
        Err(_) => {
            tracing::error!("No route for redirect target {}, falling back to login", path);
            navigator.push(Route::Login {});
        }
    }
}

#[component]
pub fn Signup() -> Element {
    let navigator = use_navigator();
    let client = use_signup_client();
    let mut toasts = use_toasts();
    let form = use_signal(SignupForm::default);
    let mut session = use_signal(SignupSession::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let step = session
            .write()
            .begin_submit(&form.read(), &mut *toasts.write());
        let SubmitStep::Send(request) = step else {
            return;
        };

        let client = client.clone();
        spawn(async move {
            let result = client.signup(&request).await;
            let outcome = session
                .write()
                .complete_submit(result, &mut *toasts.write());

            if let SubmitOutcome::Succeeded { redirect_to } = outcome {
                navigate_to(navigator, redirect_to);
            }
        });
    };

    let values = form.read().clone();
    let (password_type, visibility_icon, submitting, error_message) = {
        let state = session.read();
        (
            state.password_input_type(),
            state.visibility_icon(),
            state.is_submitting(),
            state.error_message().map(str::to_string),
        )
    };

    rsx! {
        main { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "page-title", "Sign up" }

                form { class: "auth-form", onsubmit,
                    Input {
                        name: "userName".to_string(),
                        value: values.username,
                        placeholder: "Username".to_string(),
                        autocomplete: "username".to_string(),
                        oninput: field_input(form, session, SignupField::Username),
                    }

                    Input {
                        name: "email".to_string(),
                        value: values.email,
                        placeholder: "Email".to_string(),
                        autocomplete: "email".to_string(),
                        oninput: field_input(form, session, SignupField::Email),
                    }

                    PasswordInput {
                        name: "password".to_string(),
                        value: values.password,
                        placeholder: "Password".to_string(),
                        input_type: password_type,
                        icon: visibility_icon,
                        on_toggle: move |_| session.write().toggle_password_visibility(),
                        oninput: field_input(form, session, SignupField::Password),
                    }

                    // Always masked, only the first password field toggles
                    Input {
                        name: "confirm_password".to_string(),
                        input_type: "password".to_string(),
                        value: values.confirm_password,
                        placeholder: "Confirm Password".to_string(),
                        autocomplete: "new-password".to_string(),
                        oninput: field_input(form, session, SignupField::ConfirmPassword),
                    }

                    if let Some(message) = error_message {
                        div { role: "alert", class: "form-error", "{message}" }
                    }

                    Button {
                        button_type: "submit".to_string(),
                        class: "btn-full".to_string(),
                        disabled: submitting,
                        if submitting {
                            "Creating Account..."
                        } else {
                            "Create Account"
                        }
                    }
                }

                p { class: "legal-text",
                    "By signing up, you agree to the "
                    a { class: "legal-link", href: "#", "Terms of Service" }
                    " and "
                    a { class: "legal-link", href: "#", "Privacy Policy" }
                }
            }

            p { class: "auth-footer",
                "Already have an account? "
                Link { class: "auth-link", to: Route::Login {}, "Log in" }
            }
        }
    }
}
