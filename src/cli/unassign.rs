use std::path::PathBuf;

use roster::{CourseCode, FacultyId, Store};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The faculty member currently teaching the course
    faculty: FacultyId,

    /// The course to vacate
    course: CourseCode,
}

impl Command {
    #[instrument]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut store = Store::open(root)?;

        store.registry_mut().unassign(&self.faculty, &self.course)?;
        store.flush()?;

        println!(
            "{}",
            format!("✅ {} no longer teaches {}", self.faculty, self.course).success()
        );
        Ok(())
    }
}
