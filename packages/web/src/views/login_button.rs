use dioxus::prelude::*;

use crate::Route;

/// The login page has its own form, so the shortcut is pointless there.
fn shows_login_button(route: &Route) -> bool {
    !matches!(route, Route::Login {})
}

/// Floating "Login" link, hidden on the login page itself.
#[component]
pub fn LoginButton() -> Element {
    let route = use_route::<Route>();

    if !shows_login_button(&route) {
        return rsx! {};
    }

    rsx! {
        Link { to: Route::Login {}, class: "floating-login", "Login" }
    }
}

/// Wraps every page so the floating login link sits above the routed view.
#[component]
pub fn PageLayout() -> Element {
    rsx! {
        LoginButton {}
        Outlet::<Route> {}
    }
}
