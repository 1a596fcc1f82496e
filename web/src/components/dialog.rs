use dioxus::prelude::*;

use crate::components::icon::Icon;

/// Modal dialog with a header, arbitrary form content and a submit footer.
/// Clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn Dialog(
    open: bool,
    title: String,
    description: String,
    submit_label: String,
    #[props(default = "max-w-lg")] width_class: &'static str,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50",
            onclick: move |_| on_close.call(()),
            div {
                class: "relative w-full {width_class} bg-white rounded-lg shadow-lg p-6 max-h-[90vh] overflow-y-auto",
                onclick: move |ev| ev.stop_propagation(),
                button {
                    class: "absolute right-4 top-4 text-gray-400 hover:text-gray-700",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: &icondata::AiCloseOutlined, class: "w-4 h-4" }
                }
                div {
                    class: "space-y-1.5",
                    h2 { class: "text-lg font-semibold text-gray-900", "{title}" }
                    p { class: "text-sm text-gray-500", "{description}" }
                }
                div {
                    class: "grid gap-4 py-4",
                    {children}
                }
                div {
                    class: "flex justify-end",
                    button {
                        class: "px-4 py-2 rounded-md bg-gray-900 text-white text-sm font-medium hover:bg-gray-700 transition-colors",
                        onclick: move |_| on_submit.call(()),
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
