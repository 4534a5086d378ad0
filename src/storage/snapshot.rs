//! YAML serialization of a [`Registry`].

use serde::{Deserialize, Serialize};

use crate::domain::{
    Course, CourseCode, Credits, Faculty, FacultyId, Registry, RegistryError, Student, StudentId,
};

/// A serializable copy of a registry.
///
/// Relationships are stored as the registry stores them: one table of
/// enrollments and one of assignments, each in the order they were made, so
/// that a round trip preserves roster and assignment ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Snapshot {
    students: Vec<StudentEntry>,
    faculty: Vec<FacultyEntry>,
    courses: Vec<CourseEntry>,
    enrollments: Vec<EnrollmentEntry>,
    assignments: Vec<AssignmentEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StudentEntry {
    id: StudentId,
    name: String,
    major: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct FacultyEntry {
    id: FacultyId,
    name: String,
    department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CourseEntry {
    code: CourseCode,
    title: String,
    credits: Credits,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    prerequisites: Vec<CourseCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct EnrollmentEntry {
    student: StudentId,
    course: CourseCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AssignmentEntry {
    course: CourseCode,
    faculty: FacultyId,
}

/// Reasons a snapshot cannot be turned back into a registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// An entry was rejected by the registry (duplicate or dangling ID).
    #[error(transparent)]
    Rejected(#[from] RegistryError),
    /// Two assignment entries name the same course.
    #[error("course {0} is assigned more than once")]
    ConflictingAssignment(CourseCode),
}

impl Snapshot {
    /// Parse a snapshot from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, has an unknown `_version`,
    /// or contains invalid identifiers or credits.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Render the snapshot as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Rebuild a registry by replaying every entry through its operations.
    ///
    /// # Errors
    ///
    /// Fails on the first entry the registry rejects, so an inconsistent
    /// snapshot never yields an inconsistent registry.
    pub fn into_registry(self) -> Result<Registry, SnapshotError> {
        let mut registry = Registry::new();

        for entry in self.students {
            registry.insert_student(Student::new(entry.id, entry.name, entry.major))?;
        }
        for entry in self.faculty {
            registry.insert_faculty(Faculty::new(entry.id, entry.name, entry.department))?;
        }
        for entry in self.courses {
            registry.insert_course(
                Course::new(entry.code, entry.title, entry.credits)
                    .with_prerequisites(entry.prerequisites),
            )?;
        }
        for entry in self.enrollments {
            registry.enroll(&entry.student, &entry.course)?;
        }
        for entry in self.assignments {
            if registry.assign(&entry.faculty, &entry.course)?.previous.is_some() {
                return Err(SnapshotError::ConflictingAssignment(entry.course));
            }
        }

        Ok(registry)
    }
}

impl From<&Registry> for Snapshot {
    fn from(registry: &Registry) -> Self {
        Self {
            students: registry
                .get_all_students()
                .into_iter()
                .map(|s| StudentEntry {
                    id: s.id().clone(),
                    name: s.name().to_string(),
                    major: s.major().to_string(),
                })
                .collect(),
            faculty: registry
                .get_all_faculty()
                .into_iter()
                .map(|f| FacultyEntry {
                    id: f.id().clone(),
                    name: f.name().to_string(),
                    department: f.department().to_string(),
                })
                .collect(),
            courses: registry
                .get_all_courses()
                .into_iter()
                .map(|c| CourseEntry {
                    code: c.code().clone(),
                    title: c.title().to_string(),
                    credits: c.credits(),
                    prerequisites: c.prerequisite_codes().to_vec(),
                })
                .collect(),
            enrollments: registry
                .enrollments()
                .map(|(student, course)| EnrollmentEntry {
                    student: student.clone(),
                    course: course.clone(),
                })
                .collect(),
            assignments: registry
                .assignments()
                .map(|(course, faculty)| AssignmentEntry {
                    course: course.clone(),
                    faculty: faculty.clone(),
                })
                .collect(),
        }
    }
}

/// The serialized versions of the snapshot.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        students: Vec<StudentEntry>,
        #[serde(default)]
        faculty: Vec<FacultyEntry>,
        #[serde(default)]
        courses: Vec<CourseEntry>,
        #[serde(default)]
        enrollments: Vec<EnrollmentEntry>,
        #[serde(default)]
        assignments: Vec<AssignmentEntry>,
    },
}

impl From<Versions> for Snapshot {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                students,
                faculty,
                courses,
                enrollments,
                assignments,
            } => Self {
                students,
                faculty,
                courses,
                enrollments,
                assignments,
            },
        }
    }
}

impl From<Snapshot> for Versions {
    fn from(snapshot: Snapshot) -> Self {
        Self::V1 {
            students: snapshot.students,
            faculty: snapshot.faculty,
            courses: snapshot.courses,
            enrollments: snapshot.enrollments,
            assignments: snapshot.assignments,
        }
    }
}
