use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Browser API error: {0}")]
    Browser(String),

    #[error("Element not found: #{0}")]
    MissingElement(String),
}

impl From<JsValue> for AppError {
    fn from(err: JsValue) -> Self {
        AppError::Browser(format!("{err:?}"))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
