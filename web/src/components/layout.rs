use dioxus::prelude::*;

use crate::components::header::Header;

#[component]
pub fn AppLayout(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Header {}
            main {
                class: "max-w-7xl mx-auto px-6 py-8",
                {children}
            }
        }
    }
}
