use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Draft, Record};
use crate::error::{Error, Result};

/// Processing state of an enrollment request
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EnrollmentStatus {
    #[default]
    New,
    InProgress,
    Completed,
}

impl EnrollmentStatus {
    pub const ALL: [EnrollmentStatus; 3] = [
        EnrollmentStatus::New,
        EnrollmentStatus::InProgress,
        EnrollmentStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EnrollmentStatus::New => "Новая",
            EnrollmentStatus::InProgress => "В обработке",
            EnrollmentStatus::Completed => "Завершена",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            EnrollmentStatus::New => "new",
            EnrollmentStatus::InProgress => "in_progress",
            EnrollmentStatus::Completed => "completed",
        }
    }
}

impl Display for EnrollmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EnrollmentStatus::ALL
            .into_iter()
            .find(|status| status.label() == s || status.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Enrollment {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Course name as typed by the applicant, not a reference to a course id.
    pub course: String,
    pub date: NaiveDate,
    pub status: EnrollmentStatus,
}

#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Clone)]
pub struct EnrollmentDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<EnrollmentStatus>,
}

impl Draft for EnrollmentDraft {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "name" => self.name = Some(value.to_string()),
            "email" => self.email = Some(value.to_string()),
            "phone" => self.phone = Some(value.to_string()),
            "course" => self.course = Some(value.to_string()),
            "date" => {
                let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                    .map_err(|_| Error::InvalidDate(value.to_string()))?;
                self.date = Some(date);
            }
            "status" => self.status = Some(value.parse()?),
            _ => {
                return Err(Error::UnknownField {
                    record: Enrollment::KIND,
                    field: key.to_string(),
                })
            }
        }
        Ok(())
    }
}

impl From<&Enrollment> for EnrollmentDraft {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            name: Some(enrollment.name.clone()),
            email: Some(enrollment.email.clone()),
            phone: Some(enrollment.phone.clone()),
            course: Some(enrollment.course.clone()),
            date: Some(enrollment.date),
            status: Some(enrollment.status),
        }
    }
}

impl Record for Enrollment {
    type Draft = EnrollmentDraft;

    const KIND: &'static str = "enrollment";

    fn id(&self) -> &str {
        &self.id
    }

    /// The request date is always the creation day, whatever the draft says.
    fn from_draft(id: String, draft: &EnrollmentDraft, today: NaiveDate) -> Self {
        Enrollment {
            id,
            name: draft.name.clone().unwrap_or_default(),
            email: draft.email.clone().unwrap_or_default(),
            phone: draft.phone.clone().unwrap_or_default(),
            course: draft.course.clone().unwrap_or_default(),
            date: today,
            status: draft.status.unwrap_or_default(),
        }
    }

    fn merge(&mut self, draft: &EnrollmentDraft) {
        if let Some(v) = &draft.name {
            self.name = v.clone();
        }
        if let Some(v) = &draft.email {
            self.email = v.clone();
        }
        if let Some(v) = &draft.phone {
            self.phone = v.clone();
        }
        if let Some(v) = &draft.course {
            self.course = v.clone();
        }
        if let Some(v) = draft.date {
            self.date = v;
        }
        if let Some(v) = draft.status {
            self.status = v;
        }
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "phone" => Some(self.phone.clone()),
            "course" => Some(self.course.clone()),
            "date" => Some(self.date.format("%Y-%m-%d").to_string()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_stamps_today() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let draft = EnrollmentDraft {
            name: Some("Ольга".to_string()),
            date: NaiveDate::from_ymd_opt(2001, 1, 1),
            ..Default::default()
        };
        let enrollment = Enrollment::from_draft("4".to_string(), &draft, today);
        assert_eq!(enrollment.date, today);
        assert_eq!(enrollment.status, EnrollmentStatus::New);
        assert_eq!(enrollment.email, "");
        assert_eq!(enrollment.field("date").as_deref(), Some("2024-05-17"));
    }

    #[test]
    fn test_set_by_key() {
        let mut draft = EnrollmentDraft::default();
        assert!(draft.is_empty());
        draft.set("status", "В обработке").unwrap();
        draft.set("date", "2023-06-30").unwrap();
        assert_eq!(draft.status, Some(EnrollmentStatus::InProgress));
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2023, 6, 30));
        assert!(!draft.is_empty());

        assert_eq!(
            draft.set("date", "30.06.2023"),
            Err(Error::InvalidDate("30.06.2023".to_string()))
        );
        assert!(matches!(
            draft.set("price", "1"),
            Err(Error::UnknownField { .. })
        ));
    }

    #[test]
    fn test_status_keys_round_trip() {
        for status in EnrollmentStatus::ALL {
            assert_eq!(status.key().parse::<EnrollmentStatus>(), Ok(status));
            assert_eq!(status.label().parse::<EnrollmentStatus>(), Ok(status));
        }
    }
}
