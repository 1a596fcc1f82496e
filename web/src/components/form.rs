use dioxus::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-200 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-blue-200";

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "space-y-2",
            label { class: "text-sm font-medium text-gray-700", r#for: id, "{label}" }
            input {
                id: id,
                class: INPUT_CLASS,
                r#type: input_type,
                value: "{value}",
                oninput: move |ev| on_input.call(ev.value()),
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "space-y-2",
            label { class: "text-sm font-medium text-gray-700", r#for: id, "{label}" }
            textarea {
                id: id,
                class: "{INPUT_CLASS} min-h-[80px]",
                value: "{value}",
                oninput: move |ev| on_input.call(ev.value()),
            }
        }
    }
}

/// Dropdown over `(value, label)` options. An empty `value` shows the
/// placeholder.
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    value: String,
    options: Vec<(&'static str, &'static str)>,
    placeholder: &'static str,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "space-y-2",
            label { class: "text-sm font-medium text-gray-700", r#for: id, "{label}" }
            select {
                id: id,
                class: INPUT_CLASS,
                onchange: move |ev| on_change.call(ev.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
                for (key, text) in options {
                    option { value: key, selected: value == key, "{text}" }
                }
            }
        }
    }
}

/// File picker for images with a thumbnail of the current value.
#[component]
pub fn ImageField(
    id: &'static str,
    label: &'static str,
    preview: Option<String>,
    on_pick: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "space-y-2",
            label { class: "text-sm font-medium text-gray-700", r#for: id, "{label}" }
            div {
                class: "flex items-center space-x-4",
                input {
                    id: id,
                    class: INPUT_CLASS,
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |_| on_pick.call(()),
                }
                if let Some(src) = preview {
                    div {
                        class: "relative h-20 w-20 flex-shrink-0",
                        img {
                            class: "h-20 w-20 rounded-md object-cover",
                            src: "{src}",
                            alt: "Preview",
                        }
                    }
                }
            }
        }
    }
}
