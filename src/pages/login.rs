//! Login page - landing target after a successful signup.
//!
//! Signing in is handled by the accounts service; this page only confirms
//! where the user ended up and links back to the sign-up form.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        main { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "page-title", "Log in" }
                p { class: "body-text",
                    "Sign in with the email and password you registered."
                }
            }

            p { class: "auth-footer",
                "Need an account? "
                Link { class: "auth-link", to: Route::Signup {}, "Sign up" }
            }
        }
    }
}
