use dioxus::prelude::*;
use ui::Hero;

/// Landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
    }
}
