use dioxus::prelude::*;
use ui::icons::FaShieldHalved;
use ui::Icon;

use crate::Route;

/// Centered card with the SALVUS heading, shared by login and signup.
#[component]
pub fn AuthCard(subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gradient-to-b from-dark-darker via-dark-darker to-dark px-6 py-12",
            div {
                class: "w-full max-w-md",
                div {
                    class: "text-center mb-8",
                    Link {
                        to: Route::Home {},
                        class: "inline-block mb-4",
                        h1 { class: "text-4xl font-bold tracking-tight text-white", "SALVUS" }
                    }
                    p { class: "text-gray-400 text-sm", "{subtitle}" }
                }
                div {
                    class: "auth-card shadow-2xl",
                    {children}
                }
            }
        }
    }
}

/// Trust line and the link to the other form.
#[component]
pub fn AuthFooter(prompt: String, link_label: String, to: Route) -> Element {
    rsx! {
        div {
            class: "mt-8 pt-6 border-t border-dark-lighter/30",
            div {
                class: "flex items-center justify-center gap-2 text-xs text-gray-400 mb-4",
                span { class: "text-accent", Icon { icon: FaShieldHalved, width: 16, height: 16 } }
                span { "Secure & Encrypted" }
            }
            div {
                class: "text-center text-sm text-gray-400",
                "{prompt} "
                Link { to: to, class: "text-accent font-semibold", "{link_label}" }
            }
        }
    }
}
