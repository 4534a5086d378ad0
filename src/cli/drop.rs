use std::path::PathBuf;

use roster::{CourseCode, Store, StudentId};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The student to drop
    student: StudentId,

    /// The course to drop them from
    course: CourseCode,
}

impl Command {
    #[instrument]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut store = Store::open(root)?;

        store
            .registry_mut()
            .drop_enrollment(&self.student, &self.course)?;
        store.flush()?;

        println!(
            "{}",
            format!("✅ Dropped {} from {}", self.student, self.course).success()
        );
        Ok(())
    }
}
