use std::path::PathBuf;

use roster::{CourseCode, RegistryError, Store, StudentId};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The student to enroll
    student: StudentId,

    /// The course to enroll them in
    course: CourseCode,
}

impl Command {
    #[instrument]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut store = Store::open(root)?;

        match store.registry_mut().enroll(&self.student, &self.course) {
            Ok(()) => {
                store.flush()?;
                println!(
                    "{}",
                    format!("✅ Enrolled {} in {}", self.student, self.course).success()
                );
            }
            Err(RegistryError::AlreadyEnrolled { student, course }) => {
                println!(
                    "{}",
                    format!("ℹ️  {student} is already enrolled in {course}").info()
                );
            }
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }
}
