use chrono::NaiveDate;

use crate::columns::{course_table, enrollment_table};
use crate::config::PageConfig;
use crate::error::Result;
use crate::fixtures::{seed_courses, seed_enrollments};
use crate::model::{Course, Draft, Enrollment, Record};
use crate::store::{self, Store};
use crate::table::{DataTable, TableRow};

/// What the page's modal form is doing.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub enum DialogMode {
    #[default]
    Closed,
    Create,
    Edit(String),
}

/// State of one CRUD page: the record list, the search query and the modal
/// form with its working draft.
pub struct CrudPage<T: Record> {
    config: PageConfig,
    table: DataTable<T>,
    store: Store<T>,
    query: String,
    mode: DialogMode,
    draft: T::Draft,
}

impl<T: Record> Clone for CrudPage<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            table: self.table.clone(),
            store: self.store.clone(),
            query: self.query.clone(),
            mode: self.mode.clone(),
            draft: self.draft.clone(),
        }
    }
}

impl CrudPage<Course> {
    pub fn courses() -> Self {
        let config = PageConfig::courses();
        let table = course_table(&config);
        Self::new(config, table, seed_courses())
    }
}

impl CrudPage<Enrollment> {
    pub fn enrollments() -> Self {
        let config = PageConfig::enrollments();
        let table = enrollment_table(&config);
        Self::new(config, table, seed_enrollments())
    }
}

impl<T: Record> CrudPage<T> {
    pub fn new(config: PageConfig, table: DataTable<T>, seed: Vec<T>) -> Self {
        Self {
            config,
            table,
            store: Store::new(seed),
            query: String::new(),
            mode: DialogMode::Closed,
            draft: T::Draft::default(),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn store(&self) -> &Store<T> {
        &self.store
    }

    pub fn headers(&self) -> Vec<String> {
        self.table.headers()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Rows matching the current search query.
    pub fn visible_rows(&self) -> Vec<TableRow> {
        self.table.rows(self.store.list(), &self.query)
    }

    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != DialogMode::Closed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DialogMode::Edit(_))
    }

    pub fn draft(&self) -> &T::Draft {
        &self.draft
    }

    /// Set a draft field from raw input text, addressed by field name.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        self.draft.set(key, value)
    }

    /// Open the form empty, for a new record.
    pub fn open_create(&mut self) {
        self.draft = T::Draft::default();
        self.mode = DialogMode::Create;
    }

    /// Open the form pre-filled with the record `id`; unknown ids leave the
    /// page untouched.
    pub fn open_edit(&mut self, id: &str) {
        if let Some(record) = self.store.get(id) {
            self.draft = <T::Draft as From<&T>>::from(record);
            self.mode = DialogMode::Edit(id.to_string());
        }
    }

    /// Dismiss the form without saving. The draft is kept until the form is
    /// opened again.
    pub fn close(&mut self) {
        self.mode = DialogMode::Closed;
    }

    pub fn dialog_title(&self) -> &str {
        if self.is_editing() {
            &self.config.edit_title
        } else {
            &self.config.create_title
        }
    }

    pub fn dialog_description(&self) -> &str {
        if self.is_editing() {
            &self.config.edit_description
        } else {
            &self.config.create_description
        }
    }

    pub fn submit_label(&self) -> &str {
        if self.is_editing() {
            &self.config.edit_submit
        } else {
            &self.config.create_submit
        }
    }

    /// Save the draft: update the edited record, or create a new one. The
    /// form is closed and cleared afterwards.
    pub fn submit(&mut self) {
        self.submit_on(store::today())
    }

    pub fn submit_on(&mut self, today: NaiveDate) {
        match std::mem::take(&mut self.mode) {
            DialogMode::Edit(id) => {
                self.store.update(&id, &self.draft);
            }
            DialogMode::Create | DialogMode::Closed => {
                self.store.create_on(&self.draft, today);
            }
        }
        self.draft = T::Draft::default();
    }

    pub fn delete(&mut self, id: &str) {
        self.store.delete(id);
    }
}
