//! University records management
//!
//! Students, faculty and courses are kept in an in-memory [`Registry`] that
//! maintains enrollments and teaching assignments in both directions. A
//! [`Store`] persists the registry as a YAML snapshot.
//!
//! The crate also carries two small utilities: a [`password`] generator and
//! an arithmetic [`calculator`].

pub mod domain;
pub use domain::{
    Assignment, Config, Course, CourseCode, Credits, Faculty, FacultyId, Registry, RegistryError,
    Student, StudentId,
};

pub mod calculator;
pub mod password;

/// Snapshot persistence for the registry.
pub mod storage;
pub use storage::{LoadError, SaveError, Store};
