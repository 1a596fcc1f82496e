use chrono::NaiveDate;

use crate::error::Result;

pub mod course;
pub mod enrollment;

pub use course::{Course, CourseDraft, CourseStatus, PLACEHOLDER_IMAGE};
pub use enrollment::{Enrollment, EnrollmentDraft, EnrollmentStatus};

/// A sparse set of field values used as input to create and update.
///
/// Every field is optional; `None` means "not supplied" and leaves the target
/// field alone on update (or falls back to the default on create).
pub trait Draft: Default + Clone + PartialEq {
    /// Set a single field from raw form text, addressed by field name.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Returns true when no field has been supplied.
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A flat record held by a [`crate::store::Store`].
pub trait Record: Clone + PartialEq {
    type Draft: Draft + for<'a> From<&'a Self>;

    /// Human readable record kind, used in logs and errors.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Materialize a new record from a draft, filling defaults for every
    /// field the draft leaves unset.
    fn from_draft(id: String, draft: &Self::Draft, today: NaiveDate) -> Self;

    /// Overwrite every field present in `draft`.
    fn merge(&mut self, draft: &Self::Draft);

    /// Display text of a field addressed by its key, `None` for unknown keys.
    fn field(&self, key: &str) -> Option<String>;
}

/// Coerce raw numeric input the way a number input does: blank or malformed
/// text becomes 0.
pub fn coerce_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Coerce raw text to a non-negative count, malformed input becomes 0.
pub fn coerce_count(raw: &str) -> u32 {
    let v = coerce_number(raw);
    if v <= 0.0 {
        0
    } else if v >= u32::MAX as f64 {
        u32::MAX
    } else {
        v.trunc() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("500"), 500.0);
        assert_eq!(coerce_number(" 12.5 "), 12.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count("30"), 30);
        assert_eq!(coerce_count("3.9"), 3);
        assert_eq!(coerce_count("-4"), 0);
        assert_eq!(coerce_count("many"), 0);
    }
}
