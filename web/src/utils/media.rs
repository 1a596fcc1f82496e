use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Url};

use crate::utils::error::{AppError, Result};

/// Create a session-scoped object URL for the first file picked in the
/// file input `input_id`.
///
/// The URL only lives as long as the page session and is used for previews;
/// the file itself never leaves the browser. Returns `None` when no file is
/// selected.
pub fn object_url_from_input(input_id: &str) -> Result<Option<String>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Browser("No document object".to_string()))?;

    let input = document
        .get_element_by_id(input_id)
        .ok_or_else(|| AppError::MissingElement(input_id.to_string()))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| AppError::Browser(format!("#{input_id} is not an input")))?;

    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };

    let url = Url::create_object_url_with_blob(&file)?;
    log::debug!("created preview url for {}", file.name());
    Ok(Some(url))
}
