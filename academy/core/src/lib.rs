//! Domain layer of the academy admin dashboard: course and enrollment
//! records, the in-memory stores the pages own, and the table/search model
//! the UI renders.

pub mod columns;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod model;
pub mod page;
pub mod store;
pub mod table;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::config::PageConfig;
    pub use crate::error::{Error, Result};
    pub use crate::model::{
        Course, CourseDraft, CourseStatus, Draft, Enrollment, EnrollmentDraft, EnrollmentStatus,
        Record,
    };
    pub use crate::page::{CrudPage, DialogMode};
    pub use crate::store::Store;
    pub use crate::table::{Cell, ColumnDef, DataTable, SearchOptions, TableRow};
}
