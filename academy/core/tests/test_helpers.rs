// Shared helpers for the store and table integration tests

#![allow(dead_code)]

use academy_core::fixtures::{seed_courses, seed_enrollments};
use academy_core::prelude::*;
use chrono::NaiveDate;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn course_store() -> Store<Course> {
    init_logger();
    Store::new(seed_courses())
}

pub fn enrollment_store() -> Store<Enrollment> {
    init_logger();
    Store::new(seed_enrollments())
}

pub fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
}

pub fn ids<T: Record>(store: &Store<T>) -> Vec<String> {
    store.list().iter().map(|r| r.id().to_string()).collect()
}
