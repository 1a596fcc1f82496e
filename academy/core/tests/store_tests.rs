// Store behaviour over the seeded course and enrollment lists

use academy_core::prelude::*;
use academy_core::store::today;

mod test_helpers;
use test_helpers::{course_store, enrollment_store, fixed_day, ids};

#[test]
fn test_create_course_with_defaults() {
    let mut store = course_store();
    let draft = CourseDraft {
        name: Some("Test".to_string()),
        price: Some(500.0),
        ..Default::default()
    };
    let created = store.create(&draft).clone();

    assert_eq!(store.len(), 3);
    assert_eq!(created.id, "3");
    assert_eq!(created.name, "Test");
    assert_eq!(created.price, 500.0);
    assert_eq!(created.students, 0);
    assert_eq!(created.status, CourseStatus::Draft);
    assert_eq!(created.description, "");
    assert_eq!(created.image, academy_core::model::PLACEHOLDER_IMAGE);
    assert_eq!(store.list().last(), Some(&created));
}

#[test]
fn test_create_ids_are_fresh_without_deletes() {
    let mut store = course_store();
    for _ in 0..5 {
        let before = ids(&store);
        let id = store.create(&CourseDraft::default()).id.clone();
        assert!(!before.contains(&id), "id {id} reused: {before:?}");
        assert_eq!(store.len(), before.len() + 1);
    }
}

#[test]
fn test_update_course_price_only() {
    let mut store = course_store();
    let original = store.list().to_vec();
    let patch = CourseDraft {
        price: Some(12000.0),
        ..Default::default()
    };

    assert_eq!(store.update("1", &patch), 1);

    let updated = store.get("1").unwrap();
    assert_eq!(updated.price, 12000.0);
    let mut expected = original[0].clone();
    expected.price = 12000.0;
    assert_eq!(updated, &expected);
    assert_eq!(store.get("2"), Some(&original[1]));
}

#[test]
fn test_update_overwrites_every_supplied_field() {
    let mut store = enrollment_store();
    let patch = EnrollmentDraft {
        email: Some("new@example.com".to_string()),
        status: Some(EnrollmentStatus::Completed),
        date: Some(fixed_day()),
        ..Default::default()
    };
    store.update("2", &patch);

    let e = store.get("2").unwrap();
    assert_eq!(e.email, "new@example.com");
    assert_eq!(e.status, EnrollmentStatus::Completed);
    assert_eq!(e.date, fixed_day());
    assert_eq!(e.name, "Александр Петров");
    assert_eq!(e.phone, "+7 (999) 987-65-43");
}

#[test]
fn test_update_unknown_id_is_silent() {
    let mut store = course_store();
    let before = store.clone();
    let patch = CourseDraft {
        name: Some("ghost".to_string()),
        ..Default::default()
    };
    assert_eq!(store.update("404", &patch), 0);
    assert_eq!(store, before);
}

#[test]
fn test_delete_enrollment() {
    let mut store = enrollment_store();
    let third = store.get("3").cloned();

    let removed = store.delete("2");

    assert_eq!(removed.map(|e| e.name), Some("Александр Петров".to_string()));
    assert_eq!(ids(&store), vec!["1", "3"]);
    assert_eq!(store.get("3").cloned(), third);
}

#[test]
fn test_delete_unknown_id_is_silent() {
    let mut store = enrollment_store();
    assert!(store.delete("7").is_none());
    assert_eq!(ids(&store), vec!["1", "2", "3"]);
}

#[test]
fn test_create_enrollment_defaults_to_new_today() {
    let mut store = enrollment_store();
    let draft = EnrollmentDraft {
        name: Some("Ольга Смирнова".to_string()),
        course: Some("Веб-разработка".to_string()),
        ..Default::default()
    };

    let before = today();
    let created = store.create(&draft).clone();
    let after = today();

    assert_eq!(created.id, "4");
    assert_eq!(created.status, EnrollmentStatus::New);
    assert!(created.date == before || created.date == after);
}

#[test]
fn test_create_enrollment_ignores_draft_date() {
    let mut store = enrollment_store();
    let draft = EnrollmentDraft {
        date: Some(chrono::NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()),
        status: Some(EnrollmentStatus::InProgress),
        ..Default::default()
    };
    let created = store.create_on(&draft, fixed_day());
    assert_eq!(created.date, fixed_day());
    assert_eq!(created.status, EnrollmentStatus::InProgress);
}

#[test]
fn test_id_collision_after_delete() {
    let mut store = enrollment_store();
    store.delete("1");
    let created = store.create_on(&EnrollmentDraft::default(), fixed_day());
    assert_eq!(created.id, "3");
    assert_eq!(ids(&store), vec!["2", "3", "3"]);

    // update reaches every record sharing the id
    let patch = EnrollmentDraft {
        phone: Some("+7 (900) 000-00-00".to_string()),
        ..Default::default()
    };
    assert_eq!(store.update("3", &patch), 2);
    assert!(store
        .list()
        .iter()
        .filter(|e| e.id == "3")
        .all(|e| e.phone == "+7 (900) 000-00-00"));
    assert_eq!(store.get("2").map(|e| e.phone.as_str()), Some("+7 (999) 987-65-43"));

    // delete removes only the first match
    store.delete("3");
    assert_eq!(ids(&store), vec!["2", "3"]);
    assert_eq!(store.get("3").map(|e| e.date), Some(fixed_day()));
}
