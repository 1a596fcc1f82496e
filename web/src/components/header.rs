use dioxus::prelude::*;
use dioxus_router::{Link, use_route};
use icondata::Icon as IconData;

use crate::app::Route;
use crate::components::icon::Icon;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "bg-white shadow-sm border-b border-gray-200",
            div {
                class: "px-6 py-4",
                div {
                    class: "flex items-center justify-between",
                    // Brand
                    div {
                        class: "flex items-center space-x-4",
                        Link {
                            to: Route::CoursesPage {},
                            class: "text-xl font-bold text-gray-900 hover:text-blue-600",
                            "Панель администратора"
                        }
                    }

                    nav {
                        class: "flex items-center space-x-1",
                        NavTab {
                            to: Route::CoursesPage {},
                            icon: &icondata::AiBookOutlined,
                            label: "Курсы"
                        }
                        NavTab {
                            to: Route::EnrollmentsPage {},
                            icon: &icondata::AiFormOutlined,
                            label: "Заявки"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavTab(to: Route, icon: &'static IconData, label: &'static str) -> Element {
    let route = use_route::<Route>();
    let is_active = route == to;

    let class_str = if is_active {
        "flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium transition-colors bg-blue-100 text-blue-700 hover:bg-blue-200"
    } else {
        "flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium transition-colors text-gray-700 hover:bg-gray-100 hover:text-gray-900"
    };

    rsx! {
        Link {
            to: to,
            class: class_str,
            Icon { icon, class: "w-4 h-4" }
            span { "{label}" }
        }
    }
}
