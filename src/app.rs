use dioxus::prelude::*;
use onboard_core::Toasts;

use crate::components::ToastHost;
use crate::pages::{Login, Signup};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - redirects to the sign-up form
/// - `/signup` - account creation form
/// - `/login` - where a successful signup lands
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Signup {})]
    #[route("/signup")]
    Signup {},
    #[route("/login")]
    Login {},
}

/// Root application component.
///
/// Provides global styles, the toast queue and routing. The accounts API
/// client is injected by the launcher.
#[component]
pub fn App() -> Element {
    let toasts: Signal<Toasts> = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ToastHost {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::LOGIN_ROUTE;

    #[test]
    fn login_redirect_target_is_a_route() {
        assert_eq!(LOGIN_ROUTE.parse::<Route>().ok(), Some(Route::Login {}));
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Signup {}.to_string(), "/signup");
        assert_eq!(Route::Login {}.to_string(), "/login");
    }
}
