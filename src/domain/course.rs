use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::{CourseCode, FacultyId, StudentId};

/// A course, its roster and its assigned lecturer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    #[serde(rename = "course_code")]
    code: CourseCode,
    title: String,
    credits: Credits,
    #[serde(rename = "prerequisites")]
    prerequisite_codes: Vec<CourseCode>,
    #[serde(rename = "enrolled_students")]
    pub(crate) enrolled_student_ids: Vec<StudentId>,
    #[serde(rename = "faculty_id")]
    pub(crate) assigned_faculty_id: Option<FacultyId>,
}

impl Course {
    /// Construct a new [`Course`] with no prerequisites, students or
    /// lecturer.
    #[must_use]
    pub fn new(code: CourseCode, title: impl Into<String>, credits: Credits) -> Self {
        Self {
            code,
            title: title.into(),
            credits,
            prerequisite_codes: Vec::new(),
            enrolled_student_ids: Vec::new(),
            assigned_faculty_id: None,
        }
    }

    /// Set the prerequisite course codes.
    ///
    /// Prerequisites are informational. They are not checked on enrollment and
    /// need not refer to registered courses. The list is kept as given.
    #[must_use]
    pub fn with_prerequisites(mut self, prerequisites: impl IntoIterator<Item = CourseCode>) -> Self {
        self.prerequisite_codes = prerequisites.into_iter().collect();
        self
    }

    /// The unique course code.
    #[must_use]
    pub const fn code(&self) -> &CourseCode {
        &self.code
    }

    /// The course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Credit value of the course.
    #[must_use]
    pub const fn credits(&self) -> Credits {
        self.credits
    }

    /// Prerequisite course codes, in the order given.
    #[must_use]
    pub fn prerequisite_codes(&self) -> &[CourseCode] {
        &self.prerequisite_codes
    }

    /// IDs of enrolled students, in enrollment order.
    #[must_use]
    pub fn enrolled_student_ids(&self) -> &[StudentId] {
        &self.enrolled_student_ids
    }

    /// The faculty member currently teaching the course, if any.
    #[must_use]
    pub const fn assigned_faculty_id(&self) -> Option<&FacultyId> {
        self.assigned_faculty_id.as_ref()
    }
}

/// The credit value of a course.
///
/// Always finite and non-negative. Fractional credits are allowed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Credits(f64);

impl Credits {
    /// Construct a credit value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is negative, NaN or infinite.
    pub fn new(value: f64) -> Result<Self, CreditsError> {
        if !value.is_finite() {
            return Err(CreditsError::NotFinite);
        }
        if value < 0.0 {
            return Err(CreditsError::Negative(value));
        }
        // `-0.0 + 0.0` is `+0.0`
        Ok(Self(value + 0.0))
    }

    /// The numeric value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Credits {
    type Error = CreditsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Credits> for f64 {
    fn from(credits: Credits) -> Self {
        credits.0
    }
}

impl FromStr for Credits {
    type Err = CreditsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| CreditsError::NotANumber(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors produced when reading a credit value.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CreditsError {
    /// The input could not be parsed as a number.
    #[error("Credits must be a number (got '{0}').")]
    NotANumber(String),
    /// The value was negative.
    #[error("Credits cannot be negative (got {0}).")]
    Negative(f64),
    /// The value was NaN or infinite.
    #[error("Credits must be a finite number.")]
    NotFinite,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn code(s: &str) -> CourseCode {
        CourseCode::new(s).unwrap()
    }

    #[test_case("3", 3.0; "integer")]
    #[test_case("4.5", 4.5; "fractional")]
    #[test_case(" 2 ", 2.0; "padded")]
    #[test_case("0", 0.0; "zero")]
    fn parses_credits(input: &str, expected: f64) {
        let credits: Credits = input.parse().unwrap();
        assert!((credits.get() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_numeric_credits() {
        let error = "three".parse::<Credits>().unwrap_err();
        assert_eq!(error, CreditsError::NotANumber("three".to_string()));
        assert_eq!(error.to_string(), "Credits must be a number (got 'three').");
    }

    #[test]
    fn rejects_negative_credits() {
        assert_eq!(
            "-1".parse::<Credits>().unwrap_err(),
            CreditsError::Negative(-1.0)
        );
    }

    #[test_case("NaN"; "nan")]
    #[test_case("inf"; "infinity")]
    fn rejects_non_finite_credits(input: &str) {
        assert_eq!(
            input.parse::<Credits>().unwrap_err(),
            CreditsError::NotFinite
        );
    }

    #[test]
    fn negative_zero_credits_read_as_zero() {
        let credits: Credits = "-0".parse().unwrap();
        assert!(credits.get().is_sign_positive());
        assert_eq!(credits.to_string(), "0");
    }

    #[test]
    fn credits_display_without_trailing_zeroes() {
        assert_eq!(Credits::new(3.0).unwrap().to_string(), "3");
        assert_eq!(Credits::new(1.5).unwrap().to_string(), "1.5");
    }

    #[test]
    fn prerequisites_are_kept_as_given() {
        let course = Course::new(code("CS201"), "Data Structures", Credits::new(3.0).unwrap())
            .with_prerequisites([code("CS101"), code("MA101"), code("CS101")]);
        assert_eq!(
            course.prerequisite_codes(),
            &[code("CS101"), code("MA101"), code("CS101")]
        );
    }

    #[test]
    fn new_course_is_empty_and_unassigned() {
        let course = Course::new(code("PH101"), "Intro to Physics", Credits::new(3.0).unwrap());
        assert!(course.enrolled_student_ids().is_empty());
        assert!(course.assigned_faculty_id().is_none());
    }
}
