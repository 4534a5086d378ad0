use serde::Serialize;

use crate::domain::{CourseCode, StudentId};

/// A student and the courses they are enrolled in.
///
/// Values returned by the [`Registry`](crate::Registry) are snapshots: the
/// enrollment list is derived from the registry's enrollment table at the
/// time of the call, and changing the snapshot does not change the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    id: StudentId,
    name: String,
    major: String,
    #[serde(rename = "enrolled_courses")]
    pub(crate) enrolled_course_codes: Vec<CourseCode>,
}

impl Student {
    /// Construct a new [`Student`] who is not enrolled in anything.
    #[must_use]
    pub fn new(id: StudentId, name: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            major: major.into(),
            enrolled_course_codes: Vec::new(),
        }
    }

    /// The student's unique identifier.
    #[must_use]
    pub const fn id(&self) -> &StudentId {
        &self.id
    }

    /// The student's full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The student's major.
    #[must_use]
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Change the major on this value.
    ///
    /// To change a registered student use
    /// [`Registry::set_student_major`](crate::Registry::set_student_major).
    pub fn set_major(&mut self, major: impl Into<String>) {
        self.major = major.into();
    }

    /// Course codes the student is enrolled in, in enrollment order.
    #[must_use]
    pub fn enrolled_course_codes(&self) -> &[CourseCode] {
        &self.enrolled_course_codes
    }

    /// Whether the student is enrolled in the given course.
    #[must_use]
    pub fn is_enrolled_in(&self, course_code: &CourseCode) -> bool {
        self.enrolled_course_codes.contains(course_code)
    }
}
