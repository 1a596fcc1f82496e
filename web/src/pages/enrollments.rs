use dioxus::prelude::*;
use academy_core::model::EnrollmentStatus;
use academy_core::page::CrudPage;
use academy_core::prelude::Enrollment;

use crate::components::dialog::Dialog;
use crate::components::form::{SelectField, TextField};
use crate::components::page::CrudLayout;
use crate::components::table_view::DataTable;
use crate::hooks::{set_draft_field, use_crud_page};

#[component]
pub fn Enrollments() -> Element {
    let mut page = use_crud_page(CrudPage::enrollments);

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
                on_close: move |_| page.write().close(),
                on_submit: move |_| page.write().submit(),
                EnrollmentForm { page }
            }
        }
    }
}

#[component]
fn EnrollmentForm(page: Signal<CrudPage<Enrollment>>) -> Element {
    let draft = page.read().draft().clone();
    let status = draft.status.map(|s| s.key().to_string()).unwrap_or_default();

    rsx! {
        TextField {
            id: "name",
            label: "Имя",
            value: draft.name.unwrap_or_default(),
            on_input: move |v: String| set_draft_field(page, "name", &v),
        }
        TextField {
            id: "email",
            label: "Email",
            value: draft.email.unwrap_or_default(),
            input_type: "email",
            on_input: move |v: String| set_draft_field(page, "email", &v),
        }
        TextField {
            id: "phone",
            label: "Телефон",
            value: draft.phone.unwrap_or_default(),
            on_input: move |v: String| set_draft_field(page, "phone", &v),
        }
        TextField {
            id: "course",
            label: "Курс",
            value: draft.course.unwrap_or_default(),
            on_input: move |v: String| set_draft_field(page, "course", &v),
        }
        SelectField {
            id: "status",
            label: "Статус",
            value: status,
            options: EnrollmentStatus::ALL.iter().map(|s| (s.key(), s.label())).collect::<Vec<_>>(),
            placeholder: "Выберите статус",
            on_change: move |v: String| set_draft_field(page, "status", &v),
        }
    }
}
