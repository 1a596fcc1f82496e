use dioxus::prelude::*;
use academy_core::table::{Cell, TableRow};

use crate::components::common::EmptyState;
use crate::components::icon::Icon;

/// Searchable table with per-row edit/delete actions.
///
/// Rows arrive already filtered; the search box only reports the query back
/// through `on_search`.
#[component]
pub fn DataTable(
    headers: Vec<String>,
    rows: Vec<TableRow>,
    query: String,
    search_placeholder: String,
    on_search: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "space-y-4",
            div {
                class: "relative max-w-sm",
                Icon { icon: &icondata::AiSearchOutlined, class: "absolute left-3 top-2.5 w-4 h-4 text-gray-400" }
                input {
                    class: "w-full pl-9 pr-3 py-2 border border-gray-200 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-blue-200",
                    r#type: "search",
                    placeholder: "{search_placeholder}",
                    value: "{query}",
                    oninput: move |ev| on_search.call(ev.value()),
                }
            }

            div {
                class: "w-full overflow-x-auto border border-gray-200 rounded-lg",

                table {
                    class: "w-full border-collapse table-auto",

                    thead {
                        tr { class: "bg-gray-50 border-b border-gray-200",
                            for header in headers.iter() {
                                th { class: "px-4 py-2 text-left font-semibold text-gray-700", "{header}" }
                            }
                            th { class: "px-4 py-2" }
                        }
                    }

                    tbody {
                        for (row_idx, row) in rows.iter().enumerate() {
                            tr {
                                key: "{row.key}",
                                class: if row_idx % 2 == 0 { "bg-white" } else { "bg-gray-50" },
                                for cell in row.cells.iter() {
                                    td { class: "px-4 py-2 text-gray-700", CellView { cell: cell.clone() } }
                                }
                                td {
                                    class: "px-4 py-2",
                                    div {
                                        class: "flex gap-2",
                                        button {
                                            class: "p-2 rounded-md text-gray-500 hover:bg-gray-100 hover:text-gray-900",
                                            title: "Редактировать",
                                            onclick: {
                                                let id = row.id.clone();
                                                move |_| on_edit.call(id.clone())
                                            },
                                            Icon { icon: &icondata::AiEditOutlined, class: "w-4 h-4" }
                                        }
                                        button {
                                            class: "p-2 rounded-md text-gray-500 hover:bg-red-50 hover:text-red-600",
                                            title: "Удалить",
                                            onclick: {
                                                let id = row.id.clone();
                                                move |_| on_delete.call(id.clone())
                                            },
                                            Icon { icon: &icondata::AiDeleteOutlined, class: "w-4 h-4" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if rows.is_empty() {
                EmptyState { message: "Нет результатов.".to_string() }
            }
        }
    }
}

#[component]
fn CellView(cell: Cell) -> Element {
    match cell {
        Cell::Text(text) => rsx! { "{text}" },
        Cell::Image { src, alt } => rsx! {
            img {
                class: "rounded-md object-cover",
                src: "{src}",
                alt: "{alt}",
                width: "50",
                height: "50",
            }
        },
    }
}
