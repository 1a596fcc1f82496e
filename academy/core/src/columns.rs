//! Column layouts of the course and enrollment tables.

use crate::config::PageConfig;
use crate::format::format_price;
use crate::model::{Course, Enrollment};
use crate::table::{Cell, ColumnDef, DataTable};

/// Fallback thumbnail when a course has no image.
pub const FALLBACK_THUMBNAIL: &str = "/placeholder.svg";

fn course_thumbnail(course: &Course) -> Cell {
    let src = if course.image.is_empty() {
        FALLBACK_THUMBNAIL.to_string()
    } else {
        course.image.clone()
    };
    Cell::Image {
        src,
        alt: course.name.clone(),
    }
}

fn course_price(course: &Course) -> Cell {
    Cell::Text(format_price(course.price))
}

pub fn course_table(config: &PageConfig) -> DataTable<Course> {
    DataTable::new(
        vec![
            ColumnDef::new("image", "Изображение").with_cell(course_thumbnail),
            ColumnDef::new("name", "Название"),
            ColumnDef::new("category", "Категория"),
            ColumnDef::new("price", "Цена").with_cell(course_price),
            ColumnDef::new("students", "Студенты"),
            ColumnDef::new("status", "Статус"),
        ],
        config.search_key.clone(),
    )
    .with_options(config.search)
}

pub fn enrollment_table(config: &PageConfig) -> DataTable<Enrollment> {
    DataTable::new(
        vec![
            ColumnDef::new("name", "Имя"),
            ColumnDef::new("email", "Email"),
            ColumnDef::new("phone", "Телефон"),
            ColumnDef::new("course", "Курс"),
            ColumnDef::new("date", "Дата"),
            ColumnDef::new("status", "Статус"),
        ],
        config.search_key.clone(),
    )
    .with_options(config.search)
}
