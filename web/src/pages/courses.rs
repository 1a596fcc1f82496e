use dioxus::prelude::*;
use academy_core::model::{CourseStatus, Record};
use academy_core::page::CrudPage;
use academy_core::prelude::Course;

use crate::components::dialog::Dialog;
use crate::components::form::{ImageField, SelectField, TextAreaField, TextField};
use crate::components::page::CrudLayout;
use crate::components::table_view::DataTable;
use crate::hooks::{set_draft_field, use_crud_page};
use crate::utils::media::object_url_from_input;

#[component]
pub fn Courses() -> Element {
    let mut page = use_crud_page(CrudPage::courses);

    let state = page.read();
    let config = state.config().clone();
    let headers = state.headers();
    let rows = state.visible_rows();
    let query = state.query().to_string();
    let open = state.is_open();
    let title = state.dialog_title().to_string();
    let description = state.dialog_description().to_string();
    let submit_label = state.submit_label().to_string();
    drop(state);

    rsx! {
        CrudLayout {
            title: config.title,
            description: config.description,
            create_label: config.create_label,
            on_create: move |_| page.write().open_create(),

            DataTable {
                headers,
                rows,
                query,
                search_placeholder: config.search_placeholder,
                on_search: move |q: String| page.write().set_query(q),
                on_edit: move |id: String| page.write().open_edit(&id),
                on_delete: move |id: String| page.write().delete(&id),
            }

            Dialog {
                open,
                title,
                description,
                submit_label,
                width_class: "max-w-3xl",
                on_close: move |_| page.write().close(),
                on_submit: move |_| page.write().submit(),
                CourseForm { page }
            }
        }
    }
}

#[component]
fn CourseForm(page: Signal<CrudPage<Course>>) -> Element {
    let draft = page.read().draft().clone();
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    // A zero price shows as an empty input.
    let price = draft
        .price
        .filter(|p| *p != 0.0)
        .map(|p| p.to_string())
        .unwrap_or_default();
    let status = draft.status.map(|s| s.key().to_string()).unwrap_or_default();
    let preview = draft.image.clone().filter(|image| !image.is_empty());

    rsx! {
        div {
            class: "grid grid-cols-2 gap-4",
            TextField {
                id: "name",
                label: "Название",
                value: text(&draft.name),
                on_input: move |v: String| set_draft_field(page, "name", &v),
            }
            TextField {
                id: "category",
                label: "Категория",
                value: text(&draft.category),
                on_input: move |v: String| set_draft_field(page, "category", &v),
            }
        }
        TextAreaField {
            id: "description",
            label: "Описание",
            value: text(&draft.description),
            on_input: move |v: String| set_draft_field(page, "description", &v),
        }
        div {
            class: "grid grid-cols-2 gap-4",
            TextField {
                id: "price",
                label: "Цена",
                value: price,
                input_type: "number",
                on_input: move |v: String| set_draft_field(page, "price", &v),
            }
            TextField {
                id: "duration",
                label: "Продолжительность",
                value: text(&draft.duration),
                on_input: move |v: String| set_draft_field(page, "duration", &v),
            }
        }
        div {
            class: "grid grid-cols-2 gap-4",
            TextField {
                id: "level",
                label: "Уровень",
                value: text(&draft.level),
                on_input: move |v: String| set_draft_field(page, "level", &v),
            }
            TextField {
                id: "instructor",
                label: "Инструктор",
                value: text(&draft.instructor),
                on_input: move |v: String| set_draft_field(page, "instructor", &v),
            }
        }
        ImageField {
            id: "image",
            label: "Изображение",
            preview,
            on_pick: move |_| match object_url_from_input("image") {
                Ok(Some(url)) => set_draft_field(page, "image", &url),
                Ok(None) => {}
                Err(err) => log::warn!("{} image preview failed: {err}", Course::KIND),
            },
        }
        SelectField {
            id: "status",
            label: "Статус",
            value: status,
            options: CourseStatus::ALL.iter().map(|s| (s.key(), s.label())).collect::<Vec<_>>(),
            placeholder: "Выберите статус",
            on_change: move |v: String| set_draft_field(page, "status", &v),
        }
    }
}
