// Page level flows: search, dialog, submit

use academy_core::columns::FALLBACK_THUMBNAIL;
use academy_core::prelude::*;

mod test_helpers;
use test_helpers::{fixed_day, init_logger};

fn row_ids(rows: &[TableRow]) -> Vec<&str> {
    rows.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_search_filters_by_name_without_mutating() {
    init_logger();
    let mut page = CrudPage::courses();
    page.set_query("javascript");
    assert_eq!(row_ids(&page.visible_rows()), vec!["2"]);
    assert_eq!(page.store().len(), 2);

    page.set_query("");
    assert_eq!(row_ids(&page.visible_rows()), vec!["1", "2"]);
}

#[test]
fn test_search_ignores_other_fields() {
    let mut page = CrudPage::enrollments();
    // matches an email, not a name
    page.set_query("example.com");
    assert!(page.visible_rows().is_empty());
    page.set_query("Мария");
    assert_eq!(row_ids(&page.visible_rows()), vec!["3"]);
}

#[test]
fn test_case_sensitive_search() {
    let mut config = PageConfig::courses();
    config.search.case_sensitive = true;
    let table = academy_core::columns::course_table(&config);
    let mut page = CrudPage::new(config, table, academy_core::fixtures::seed_courses());

    page.set_query("javascript");
    assert!(page.visible_rows().is_empty());
    page.set_query("JavaScript");
    assert_eq!(row_ids(&page.visible_rows()), vec!["2"]);
}

#[test]
fn test_course_rows_render_cells() {
    let page = CrudPage::courses();
    let rows = page.visible_rows();
    assert_eq!(page.headers().len(), 6);
    assert_eq!(rows[0].cells[1], Cell::text("Введение в веб-разработку"));
    assert_eq!(rows[0].cells[3], Cell::text("9\u{a0}900 ₽"));
    assert_eq!(rows[0].cells[4], Cell::text("50"));
    assert_eq!(rows[0].cells[5], Cell::text("Активный"));
    assert!(matches!(&rows[0].cells[0], Cell::Image { alt, .. } if alt == "Введение в веб-разработку"));
}

#[test]
fn test_empty_image_falls_back_in_table() {
    let mut page = CrudPage::courses();
    page.open_edit("1");
    page.set_field("image", "").unwrap();
    page.submit_on(fixed_day());

    let rows = page.visible_rows();
    assert_eq!(
        rows[0].cells[0],
        Cell::Image {
            src: FALLBACK_THUMBNAIL.to_string(),
            alt: "Введение в веб-разработку".to_string()
        }
    );
}

#[test]
fn test_create_through_dialog() {
    let mut page = CrudPage::courses();
    page.open_create();
    assert_eq!(page.mode(), &DialogMode::Create);
    page.set_field("name", "Test").unwrap();
    page.set_field("price", "500").unwrap();
    page.submit_on(fixed_day());

    assert!(!page.is_open());
    assert!(page.draft().is_empty());
    let created = page.store().get("3").unwrap();
    assert_eq!(created.name, "Test");
    assert_eq!(created.price, 500.0);
    assert_eq!(created.status, CourseStatus::Draft);
}

#[test]
fn test_edit_through_dialog() {
    let mut page = CrudPage::enrollments();
    page.open_edit("1");
    assert_eq!(page.mode(), &DialogMode::Edit("1".to_string()));
    page.set_field("status", "Завершена").unwrap();
    page.submit_on(fixed_day());

    let e = page.store().get("1").unwrap();
    assert_eq!(e.status, EnrollmentStatus::Completed);
    assert_eq!(e.name, "Елена Иванова");
    assert_eq!(e.date.to_string(), "2023-07-01");
    assert_eq!(page.store().len(), 3);
}

#[test]
fn test_malformed_price_coerces_to_zero() {
    let mut page = CrudPage::courses();
    page.open_create();
    page.set_field("price", "дорого").unwrap();
    page.submit_on(fixed_day());
    assert_eq!(page.store().get("3").map(|c| c.price), Some(0.0));
}

#[test]
fn test_delete_from_page() {
    let mut page = CrudPage::enrollments();
    page.delete("2");
    page.delete("2");
    assert_eq!(row_ids(&page.visible_rows()), vec!["1", "3"]);
}

#[test]
fn test_row_keys_stay_unique_after_id_collision() {
    init_logger();
    let mut page = CrudPage::courses();
    page.delete("1");
    page.open_create();
    page.set_field("name", "Новый курс").unwrap();
    page.submit_on(fixed_day());

    let rows = page.visible_rows();
    assert_eq!(row_ids(&rows), vec!["2", "2"]);

    let keys: std::collections::HashSet<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys.len(), rows.len(), "row keys repeat: {rows:?}");

    // filtering keeps each row's key
    page.set_query("Новый");
    let filtered = page.visible_rows();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].key, rows[1].key);
}
