use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::SearchOptions;

/// Texts and table settings of one CRUD page.
///
/// The built-in presets describe the course and enrollment pages; a page can
/// also be configured from JSON:
///
/// ```rust
/// let json = r#"{
///     "title": "Courses",
///     "description": "Manage the catalog",
///     "create_label": "New course",
///     "create_title": "New course",
///     "edit_title": "Edit course",
///     "create_description": "Fill in the course details.",
///     "edit_description": "Change the course details.",
///     "create_submit": "Create",
///     "edit_submit": "Save",
///     "search_key": "name",
///     "search_placeholder": "Search..."
/// }"#;
/// let config = academy_core::config::PageConfig::from_json(json)?;
/// assert!(!config.search.case_sensitive);
/// # Ok::<(), academy_core::Error>(())
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct PageConfig {
    pub title: String,
    pub description: String,
    pub create_label: String,
    pub create_title: String,
    pub edit_title: String,
    pub create_description: String,
    pub edit_description: String,
    pub create_submit: String,
    pub edit_submit: String,
    /// Record field the search box filters on.
    pub search_key: String,
    pub search_placeholder: String,
    #[serde(default)]
    pub search: SearchOptions,
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        log::debug!("loaded page config `{}`", config.title);
        Ok(config)
    }

    pub fn courses() -> Self {
        Self {
            title: "Курсы".to_string(),
            description: "Управление курсами вашего образовательного центра".to_string(),
            create_label: "Создать курс".to_string(),
            create_title: "Создать новый курс".to_string(),
            edit_title: "Редактировать курс".to_string(),
            create_description: "Заполните информацию о новом курсе здесь.".to_string(),
            edit_description: "Измените информацию о курсе здесь.".to_string(),
            create_submit: "Создать курс".to_string(),
            edit_submit: "Сохранить изменения".to_string(),
            search_key: "name".to_string(),
            search_placeholder: "Поиск по названию...".to_string(),
            search: SearchOptions::default(),
        }
    }

    pub fn enrollments() -> Self {
        Self {
            title: "Заявки".to_string(),
            description: "Управление заявками на курсы от пользователей".to_string(),
            create_label: "Создать заявку".to_string(),
            create_title: "Создать новую заявку".to_string(),
            edit_title: "Редактировать заявку".to_string(),
            create_description: "Заполните информацию о новой заявке здесь.".to_string(),
            edit_description: "Измените информацию о заявке здесь.".to_string(),
            create_submit: "Создать заявку".to_string(),
            edit_submit: "Сохранить изменения".to_string(),
            search_key: "name".to_string(),
            search_placeholder: "Поиск по имени...".to_string(),
            search: SearchOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_presets_search_by_name() {
        assert_eq!(PageConfig::courses().search_key, "name");
        assert_eq!(PageConfig::enrollments().search_key, "name");
    }

    #[test]
    fn test_json_round_trip_keeps_case_flag() {
        let mut config = PageConfig::enrollments();
        config.search.case_sensitive = true;
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PageConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        let err = PageConfig::from_json(r#"{"title": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
