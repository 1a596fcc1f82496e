use dioxus::prelude::*;
use icondata::Icon as IconData;

#[component]
pub fn Icon(icon: &'static IconData, class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: icon.view_box.unwrap_or("0 0 24 24"),
            fill: icon.fill.unwrap_or("currentColor"),
            stroke: icon.stroke.unwrap_or("none"),
            dangerous_inner_html: icon.data,
        }
    }
}
