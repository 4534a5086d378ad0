use std::path::PathBuf;

use roster::{Assignment, CourseCode, FacultyId, RegistryError, Store};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The faculty member who will teach the course
    faculty: FacultyId,

    /// The course to assign
    course: CourseCode,
}

impl Command {
    #[instrument]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut store = Store::open(root)?;

        match store.registry_mut().assign(&self.faculty, &self.course) {
            Ok(Assignment {
                faculty,
                course,
                previous,
            }) => {
                store.flush()?;
                println!(
                    "{}",
                    format!("✅ {faculty} now teaches {course}").success()
                );
                if let Some(previous) = previous {
                    println!("   {}", format!("replacing {previous}").dim());
                }
            }
            Err(RegistryError::AlreadyAssigned { faculty, course }) => {
                println!(
                    "{}",
                    format!("ℹ️  {faculty} already teaches {course}").info()
                );
            }
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }
}
