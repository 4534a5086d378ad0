use serde::Serialize;

use crate::domain::{CourseCode, FacultyId};

/// A member of faculty and the courses assigned to them.
///
/// Like [`Student`](crate::Student), a value handed out by the registry is a
/// snapshot of its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faculty {
    id: FacultyId,
    name: String,
    department: String,
    #[serde(rename = "assigned_courses")]
    pub(crate) assigned_course_codes: Vec<CourseCode>,
}

impl Faculty {
    /// Construct a new [`Faculty`] member with no courses assigned.
    #[must_use]
    pub fn new(id: FacultyId, name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            assigned_course_codes: Vec::new(),
        }
    }

    /// The unique identifier.
    #[must_use]
    pub const fn id(&self) -> &FacultyId {
        &self.id
    }

    /// Full name, including any title.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The department this faculty member belongs to.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Change the department on this value.
    ///
    /// To change a registered faculty member use
    /// [`Registry::set_faculty_department`](crate::Registry::set_faculty_department).
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    /// Course codes assigned to this faculty member, in assignment order.
    #[must_use]
    pub fn assigned_course_codes(&self) -> &[CourseCode] {
        &self.assigned_course_codes
    }

    /// Whether the given course is assigned to this faculty member.
    #[must_use]
    pub fn teaches(&self, course_code: &CourseCode) -> bool {
        self.assigned_course_codes.contains(course_code)
    }
}
