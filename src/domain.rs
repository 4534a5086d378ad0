//! Domain models for the university records.
//!
//! This module contains the identifier newtypes, the entity types and the
//! [`Registry`] that ties them together, plus the application
//! configuration.

mod config;
pub use config::Config;

mod course;
pub use course::{Course, Credits, CreditsError};

mod faculty;
pub use faculty::Faculty;

/// Validated identifiers for students, faculty and courses.
pub mod id;
pub use id::{CourseCode, FacultyId, InvalidIdError, StudentId};

pub mod registry;
pub use registry::{Assignment, Registry, RegistryError};

mod seed;

mod student;
pub use student::Student;
