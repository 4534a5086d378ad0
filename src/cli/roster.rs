use std::path::PathBuf;

use roster::{CourseCode, RegistryError, Store};
use tracing::instrument;

use crate::cli::{
    OutputFormat,
    student::print_students,
    terminal::Colorize,
};

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The course whose roster to print
    course: CourseCode,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

impl Command {
    #[instrument]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let store = Store::open(root)?;
        let registry = store.registry();

        let Some(course) = registry.get_course(&self.course) else {
            anyhow::bail!(RegistryError::CourseNotFound(self.course));
        };
        let students = registry.get_course_roster(&self.course);

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&students)?),
            OutputFormat::Pretty if students.is_empty() => {
                println!(
                    "{}",
                    format!("No students enrolled in {}.", course.code()).info()
                );
            }
            OutputFormat::Pretty => {
                println!(
                    "{}",
                    format!("{} {}", course.code(), course.title()).heading()
                );
                print_students(&students);
            }
        }

        Ok(())
    }
}
