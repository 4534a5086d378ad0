use std::path::PathBuf;

use roster::{RegistryError, Store, Student, StudentId};
use tracing::instrument;

use crate::cli::{
    OutputFormat, non_blank, prompt_to_proceed,
    terminal::{Colorize, is_narrow, join_or_dash},
};

#[derive(Debug, clap::Parser)]
pub struct Command {
    #[command(subcommand)]
    command: StudentCommand,
}

#[derive(Debug, clap::Parser)]
enum StudentCommand {
    /// Register a new student
    Add(Add),

    /// Remove a student and drop all of their enrollments
    Remove(Remove),

    /// Show a single student
    Show(Show),

    /// List all students
    List(List),

    /// Change a student's major
    SetMajor(SetMajor),
}

impl Command {
    #[instrument]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut store = Store::open(root)?;

        match self.command {
            StudentCommand::Add(add) => add.run(&mut store),
            StudentCommand::Remove(remove) => remove.run(&mut store),
            StudentCommand::Show(show) => show.run(&store),
            StudentCommand::List(list) => list.run(&store),
            StudentCommand::SetMajor(set_major) => set_major.run(&mut store),
        }
    }
}

#[derive(Debug, clap::Parser)]
struct Add {
    /// Student ID (e.g. S003)
    id: StudentId,

    /// Full name
    #[arg(value_parser = non_blank)]
    name: String,

    /// Declared major
    #[arg(value_parser = non_blank)]
    major: String,
}

impl Add {
    fn run(self, store: &mut Store) -> anyhow::Result<()> {
        let student = Student::new(self.id.clone(), self.name, self.major);
        store.registry_mut().insert_student(student)?;
        store.flush()?;

        println!("{}", format!("✅ Added student {}", self.id).success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
struct Remove {
    /// Student ID
    id: StudentId,

    /// Skip confirmation prompts
    #[arg(long, short)]
    yes: bool,
}

impl Remove {
    fn run(self, store: &mut Store) -> anyhow::Result<()> {
        let Some(student) = store.registry().get_student(&self.id) else {
            anyhow::bail!(RegistryError::StudentNotFound(self.id));
        };

        if !self.yes {
            println!("Removing student {} ({})", student.id(), student.name());
            let courses = student.enrolled_course_codes();
            if !courses.is_empty() {
                println!(
                    "\n{} will be dropped from: {}",
                    "⚠️".warning(),
                    join_or_dash(courses)
                );
            }
            prompt_to_proceed()?;
        }

        store.registry_mut().delete_student(&self.id)?;
        store.flush()?;

        println!("{}", format!("✅ Removed student {}", self.id).success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
struct Show {
    /// Student ID
    id: StudentId,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

impl Show {
    fn run(self, store: &Store) -> anyhow::Result<()> {
        let Some(student) = store.registry().get_student(&self.id) else {
            anyhow::bail!(RegistryError::StudentNotFound(self.id));
        };

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&student)?),
            OutputFormat::Pretty => {
                println!("{}", format!("# {}", student.id()).heading());
                println!("{}\n", student.name());
                println!("  Major:   {}", student.major());
                println!(
                    "  Courses: {}",
                    join_or_dash(student.enrolled_course_codes())
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
struct List {
    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

impl List {
    fn run(self, store: &Store) -> anyhow::Result<()> {
        let students = store.registry().get_all_students();

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&students)?),
            OutputFormat::Pretty if students.is_empty() => {
                println!("{}", "No students registered.".info());
            }
            OutputFormat::Pretty => print_students(&students),
        }
        Ok(())
    }
}

/// Print students as a table, or stacked on narrow terminals.
pub fn print_students(students: &[Student]) {
    if is_narrow() {
        for student in students {
            println!("{} {}", student.id().as_str().heading(), student.name());
            println!("  {}", student.major().dim());
        }
        return;
    }

    println!("{:<8} {:<24} {:<20} Courses", "ID", "Name", "Major");
    for student in students {
        println!(
            "{:<8} {:<24} {:<20} {}",
            student.id(),
            student.name(),
            student.major(),
            join_or_dash(student.enrolled_course_codes())
        );
    }
}

#[derive(Debug, clap::Parser)]
struct SetMajor {
    /// Student ID
    id: StudentId,

    /// The new major
    #[arg(value_parser = non_blank)]
    major: String,
}

impl SetMajor {
    fn run(self, store: &mut Store) -> anyhow::Result<()> {
        if !store.registry_mut().set_student_major(&self.id, &self.major) {
            anyhow::bail!(RegistryError::StudentNotFound(self.id));
        }
        store.flush()?;

        println!(
            "{}",
            format!("✅ {} is now majoring in {}", self.id, self.major).success()
        );
        Ok(())
    }
}
