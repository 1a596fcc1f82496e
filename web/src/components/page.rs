use dioxus::prelude::*;

use crate::components::icon::Icon;

/// CRUD page shell: title, description and a create button above the
/// table and form content.
#[component]
pub fn CrudLayout(
    title: String,
    description: String,
    create_label: String,
    on_create: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "flex items-start justify-between gap-4",
                div {
                    h1 {
                        class: "text-3xl font-bold text-gray-900",
                        "{title}"
                    }
                    p {
                        class: "mt-2 text-gray-600",
                        "{description}"
                    }
                }
                button {
                    class: "flex items-center gap-2 px-4 py-2 rounded-md bg-gray-900 text-white text-sm font-medium hover:bg-gray-700 transition-colors",
                    onclick: move |_| on_create.call(()),
                    Icon { icon: &icondata::AiPlusOutlined, class: "w-4 h-4" }
                    "{create_label}"
                }
            }
            {children}
        }
    }
}
