//! Building blocks shared by the login and signup forms.

use api::FormField;
use dioxus::prelude::*;

use crate::icons::{FaArrowRight, FaEnvelope, FaEye, FaEyeSlash, FaLock, FaShieldHalved, FaSpinner, FaUser};
use crate::Icon;

const INPUT_CLASS: &str = "w-full pl-12 pr-4 py-3 bg-dark-lighter/30 border border-dark-lighter/50 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:border-accent";

/// Label, placeholder and input type for a form field.
fn field_meta(field: FormField) -> (&'static str, &'static str, &'static str) {
    match field {
        FormField::Name => ("Full Name", "Enter your full name", "text"),
        FormField::Email => ("Email Address", "you@example.com", "email"),
        FormField::Password => ("Password", "••••••••", "password"),
        FormField::ConfirmPassword => ("Confirm Password", "••••••••", "password"),
    }
}

fn field_name(field: FormField) -> &'static str {
    match field {
        FormField::Name => "name",
        FormField::Email => "email",
        FormField::Password => "password",
        FormField::ConfirmPassword => "confirmPassword",
    }
}

/// A labelled text input bound to one credential field.
#[component]
pub fn CredentialInput(field: FormField, value: String, oninput: EventHandler<String>) -> Element {
    let (label, placeholder, input_type) = field_meta(field);
    let name = field_name(field);

    if input_type == "password" {
        return rsx! {
            PasswordInput {
                label: label.to_string(),
                name: name.to_string(),
                placeholder: placeholder.to_string(),
                value: value,
                oninput: oninput,
            }
        };
    }

    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-300 mb-2", "{label}" }
            div {
                class: "relative",
                span {
                    class: "absolute left-4 top-1/2 -translate-y-1/2 text-gray-400",
                    if field == FormField::Name {
                        Icon { icon: FaUser, width: 18, height: 18 }
                    } else {
                        Icon { icon: FaEnvelope, width: 18, height: 18 }
                    }
                }
                input {
                    class: INPUT_CLASS,
                    r#type: input_type,
                    name: name,
                    placeholder: placeholder,
                    required: true,
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordInput(
    label: String,
    name: String,
    placeholder: String,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    let mut visible = use_signal(|| false);
    let input_type = if visible() { "text" } else { "password" };

    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-300 mb-2", "{label}" }
            div {
                class: "relative",
                span {
                    class: "absolute left-4 top-1/2 -translate-y-1/2 text-gray-400",
                    Icon { icon: FaLock, width: 18, height: 18 }
                }
                input {
                    class: "{INPUT_CLASS} pr-12",
                    r#type: input_type,
                    name: "{name}",
                    placeholder: "{placeholder}",
                    required: true,
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "absolute right-4 top-1/2 -translate-y-1/2 text-gray-400 hover:text-white",
                    title: if visible() { "Hide password" } else { "Show password" },
                    onclick: move |_| visible.set(!visible()),
                    if visible() {
                        Icon { icon: FaEyeSlash, width: 18, height: 18 }
                    } else {
                        Icon { icon: FaEye, width: 18, height: 18 }
                    }
                }
            }
        }
    }
}

/// Submit button, disabled with a spinner while a request is in flight.
#[component]
pub fn SubmitButton(label: String, loading: bool) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: "w-full py-3.5 bg-accent hover:bg-accent-dark text-white font-semibold rounded-lg flex items-center justify-center gap-2 disabled:opacity-70 disabled:cursor-not-allowed",
            disabled: loading,
            if loading {
                span { class: "animate-spin", Icon { icon: FaSpinner, width: 18, height: 18 } }
            } else {
                span { "{label}" }
                Icon { icon: FaArrowRight, width: 18, height: 18 }
            }
        }
    }
}

/// The single error message of a form.
#[component]
pub fn FormError(message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-500/10 border border-red-500/50 text-red-500 px-4 py-3 rounded-lg mb-6 text-sm",
            role: "alert",
            "{message}"
        }
    }
}

/// Success banner, shown in place of the signup form.
#[component]
pub fn FormSuccess(title: String, message: String, children: Element) -> Element {
    rsx! {
        div {
            class: "text-center py-8",
            role: "status",
            div {
                class: "w-16 h-16 bg-green-500/20 text-green-500 rounded-full flex items-center justify-center mx-auto mb-4",
                Icon { icon: FaShieldHalved, width: 32, height: 32 }
            }
            h3 { class: "text-xl font-bold text-white mb-2", "{title}" }
            p { class: "text-gray-400 mb-6", "{message}" }
            {children}
        }
    }
}

/// "OR" separator between Google sign-in and the password form.
#[component]
pub fn OrDivider() -> Element {
    rsx! {
        div {
            class: "my-6 flex items-center",
            div { class: "flex-grow border-t border-dark-lighter/30" }
            span { class: "px-3 text-xs text-gray-400", "OR" }
            div { class: "flex-grow border-t border-dark-lighter/30" }
        }
    }
}
