//! Seed data the dashboard pages start from.

use chrono::NaiveDate;

use crate::model::{Course, CourseStatus, Enrollment, EnrollmentStatus, PLACEHOLDER_IMAGE};

pub fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            name: "Введение в веб-разработку".to_string(),
            description: "Базовый курс по HTML, CSS и JavaScript".to_string(),
            category: "Веб-разработка".to_string(),
            price: 9900.0,
            duration: "8 недель".to_string(),
            level: "Начинающий".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            instructor: "Иван Петров".to_string(),
            students: 50,
            status: CourseStatus::Active,
        },
        Course {
            id: "2".to_string(),
            name: "Продвинутый JavaScript".to_string(),
            description: "Углубленное изучение JavaScript и современных фреймворков".to_string(),
            category: "Программирование".to_string(),
            price: 14900.0,
            duration: "10 недель".to_string(),
            level: "Продвинутый".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            instructor: "Мария Сидорова".to_string(),
            students: 30,
            status: CourseStatus::Active,
        },
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn seed_enrollments() -> Vec<Enrollment> {
    vec![
        Enrollment {
            id: "1".to_string(),
            name: "Елена Иванова".to_string(),
            email: "elena@example.com".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            course: "Веб-разработка".to_string(),
            date: date(2023, 7, 1),
            status: EnrollmentStatus::New,
        },
        Enrollment {
            id: "2".to_string(),
            name: "Александр Петров".to_string(),
            email: "alex@example.com".to_string(),
            phone: "+7 (999) 987-65-43".to_string(),
            course: "Дизайн UX/UI".to_string(),
            date: date(2023, 6, 30),
            status: EnrollmentStatus::InProgress,
        },
        Enrollment {
            id: "3".to_string(),
            name: "Мария Сидорова".to_string(),
            email: "maria@example.com".to_string(),
            phone: "+7 (999) 456-78-90".to_string(),
            course: "Мобильная разработка".to_string(),
            date: date(2023, 6, 29),
            status: EnrollmentStatus::Completed,
        },
    ]
}
