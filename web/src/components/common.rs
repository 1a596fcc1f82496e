use dioxus::prelude::*;

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            class: "text-center py-8 text-gray-500",
            "{message}"
        }
    }
}
