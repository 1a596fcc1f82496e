use dioxus::prelude::*;

use academy_core::model::Record;
use academy_core::page::CrudPage;

/// Page-level CRUD state hook.
///
/// Each page owns its record list exclusively; the state lives only as long
/// as the component and is never shared between pages.
pub fn use_crud_page<T, F>(init: F) -> Signal<CrudPage<T>>
where
    T: Record + 'static,
    F: FnOnce() -> CrudPage<T>,
{
    use_signal(move || {
        let page = init();
        log::debug!(
            "mounted {} page with {} records",
            T::KIND,
            page.store().len()
        );
        page
    })
}

/// Write a form draft field addressed by name.
pub fn set_draft_field<T: Record + 'static>(mut page: Signal<CrudPage<T>>, key: &str, value: &str) {
    if let Err(err) = page.write().set_field(key, value) {
        log::warn!("ignored form input: {err}");
    }
}
