use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{coerce_count, coerce_number, Draft, Record};
use crate::error::{Error, Result};

/// Image used for courses created without one.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=100&width=100";

/// Publication state of a course
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CourseStatus {
    Active,
    #[default]
    Draft,
}

impl CourseStatus {
    pub const ALL: [CourseStatus; 2] = [CourseStatus::Active, CourseStatus::Draft];

    pub fn label(&self) -> &'static str {
        match self {
            CourseStatus::Active => "Активный",
            CourseStatus::Draft => "Черновик",
        }
    }

    /// Stable identifier used as form option value.
    pub fn key(&self) -> &'static str {
        match self {
            CourseStatus::Active => "active",
            CourseStatus::Draft => "draft",
        }
    }
}

impl Display for CourseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CourseStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CourseStatus::ALL
            .into_iter()
            .find(|status| status.label() == s || status.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub duration: String,
    pub level: String,
    pub image: String,
    pub instructor: String,
    pub students: u32,
    pub status: CourseStatus,
}

#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Clone)]
pub struct CourseDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub image: Option<String>,
    pub instructor: Option<String>,
    pub students: Option<u32>,
    pub status: Option<CourseStatus>,
}

impl Draft for CourseDraft {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "name" => self.name = Some(value.to_string()),
            "description" => self.description = Some(value.to_string()),
            "category" => self.category = Some(value.to_string()),
            "price" => self.price = Some(coerce_number(value)),
            "duration" => self.duration = Some(value.to_string()),
            "level" => self.level = Some(value.to_string()),
            "image" => self.image = Some(value.to_string()),
            "instructor" => self.instructor = Some(value.to_string()),
            "students" => self.students = Some(coerce_count(value)),
            "status" => self.status = Some(value.parse()?),
            _ => {
                return Err(Error::UnknownField {
                    record: Course::KIND,
                    field: key.to_string(),
                })
            }
        }
        Ok(())
    }
}

impl From<&Course> for CourseDraft {
    fn from(course: &Course) -> Self {
        Self {
            name: Some(course.name.clone()),
            description: Some(course.description.clone()),
            category: Some(course.category.clone()),
            price: Some(course.price),
            duration: Some(course.duration.clone()),
            level: Some(course.level.clone()),
            image: Some(course.image.clone()),
            instructor: Some(course.instructor.clone()),
            students: Some(course.students),
            status: Some(course.status),
        }
    }
}

fn text_or_default(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl Record for Course {
    type Draft = CourseDraft;

    const KIND: &'static str = "course";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: &CourseDraft, _today: NaiveDate) -> Self {
        // An empty image is treated as "no image selected".
        let image = match draft.image.as_deref() {
            Some(image) if !image.is_empty() => image.to_string(),
            _ => PLACEHOLDER_IMAGE.to_string(),
        };
        Course {
            id,
            name: text_or_default(&draft.name),
            description: text_or_default(&draft.description),
            category: text_or_default(&draft.category),
            price: draft.price.filter(|p| p.is_finite()).unwrap_or(0.0),
            duration: text_or_default(&draft.duration),
            level: text_or_default(&draft.level),
            image,
            instructor: text_or_default(&draft.instructor),
            students: 0,
            status: draft.status.unwrap_or_default(),
        }
    }

    fn merge(&mut self, draft: &CourseDraft) {
        let CourseDraft {
            name,
            description,
            category,
            price,
            duration,
            level,
            image,
            instructor,
            students,
            status,
        } = draft.clone();

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = price {
            self.price = v;
        }
        if let Some(v) = duration {
            self.duration = v;
        }
        if let Some(v) = level {
            self.level = v;
        }
        if let Some(v) = image {
            self.image = v;
        }
        if let Some(v) = instructor {
            self.instructor = v;
        }
        if let Some(v) = students {
            self.students = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
    }

    fn field(&self, key: &str) -> Option<String> {
        let value = match key {
            "id" => self.id.clone(),
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "category" => self.category.clone(),
            "price" => self.price.to_string(),
            "duration" => self.duration.clone(),
            "level" => self.level.clone(),
            "image" => self.image.clone(),
            "instructor" => self.instructor.clone(),
            "students" => self.students.to_string(),
            "status" => self.status.label().to_string(),
            _ => return None,
        };
        Some(value)
    }
}
