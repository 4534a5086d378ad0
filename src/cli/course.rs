use std::path::PathBuf;

use roster::{Course, CourseCode, Credits, RegistryError, Store};
use tracing::instrument;

use crate::cli::{
    OutputFormat, non_blank, prompt_to_proceed,
    terminal::{Colorize, is_narrow, join_or_dash},
};

#[derive(Debug, clap::Parser)]
pub struct Command {
    #[command(subcommand)]
    command: CourseCommand,
}

#[derive(Debug, clap::Parser)]
enum CourseCommand {
    /// Register a new course
    Add(Add),

    /// Remove a course, its enrollments and its assignment
    Remove(Remove),

    /// Show a single course
    Show(Show),

    /// List all courses
    List(List),
}

impl Command {
    #[instrument]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut store = Store::open(root)?;

        match self.command {
            CourseCommand::Add(add) => add.run(&mut store),
            CourseCommand::Remove(remove) => remove.run(&mut store),
            CourseCommand::Show(show) => show.run(&store),
            CourseCommand::List(list) => list.run(&store),
        }
    }
}

#[derive(Debug, clap::Parser)]
struct Add {
    /// Course code (e.g. CS201)
    code: CourseCode,

    /// Course title
    #[arg(value_parser = non_blank)]
    title: String,

    /// Credit value; fractional values are allowed
    #[arg(long, short, allow_negative_numbers = true)]
    credits: Credits,

    /// Prerequisite course codes (informational only)
    #[arg(long = "prereq", value_name = "CODE", value_delimiter = ',')]
    prerequisites: Vec<CourseCode>,
}

impl Add {
    fn run(self, store: &mut Store) -> anyhow::Result<()> {
        let course = Course::new(self.code.clone(), self.title, self.credits)
            .with_prerequisites(self.prerequisites);
        store.registry_mut().insert_course(course)?;
        store.flush()?;

        println!("{}", format!("✅ Added course {}", self.code).success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
struct Remove {
    /// Course code
    code: CourseCode,

    /// Skip confirmation prompts
    #[arg(long, short)]
    yes: bool,
}

impl Remove {
    fn run(self, store: &mut Store) -> anyhow::Result<()> {
        let Some(course) = store.registry().get_course(&self.code) else {
            anyhow::bail!(RegistryError::CourseNotFound(self.code));
        };

        if !self.yes {
            println!("Removing course {} ({})", course.code(), course.title());
            let students = course.enrolled_student_ids();
            if !students.is_empty() {
                println!(
                    "\n{} {} enrolled student(s) will be dropped",
                    "⚠️".warning(),
                    students.len()
                );
            }
            if let Some(faculty) = course.assigned_faculty_id() {
                println!("   {faculty} will no longer teach it");
            }
            prompt_to_proceed()?;
        }

        store.registry_mut().delete_course(&self.code)?;
        store.flush()?;

        println!("{}", format!("✅ Removed course {}", self.code).success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
struct Show {
    /// Course code
    code: CourseCode,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

impl Show {
    fn run(self, store: &Store) -> anyhow::Result<()> {
        let Some(course) = store.registry().get_course(&self.code) else {
            anyhow::bail!(RegistryError::CourseNotFound(self.code));
        };

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&course)?),
            OutputFormat::Pretty => {
                let lecturer = course
                    .assigned_faculty_id()
                    .map_or_else(|| "–".dim(), ToString::to_string);

                println!("{}", format!("# {}", course.code()).heading());
                println!("{}\n", course.title());
                println!("  Credits:       {}", course.credits());
                println!(
                    "  Prerequisites: {}",
                    join_or_dash(course.prerequisite_codes())
                );
                println!("  Lecturer:      {lecturer}");
                println!(
                    "  Students:      {}",
                    join_or_dash(course.enrolled_student_ids())
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
        let courses = store.registry().get_all_courses();

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&courses)?),
            OutputFormat::Pretty if courses.is_empty() => {
                println!("{}", "No courses registered.".info());
            }
            OutputFormat::Pretty if is_narrow() => {
                for course in &courses {
                    println!("{} {}", course.code().as_str().heading(), course.title());
                    println!(
                        "  {} credits, {} enrolled",
                        course.credits(),
                        course.enrolled_student_ids().len()
                    );
                }
            }
            OutputFormat::Pretty => {
                println!(
                    "{:<8} {:<28} {:>7} {:>8}  Lecturer",
                    "Code", "Title", "Credits", "Enrolled"
                );
                for course in &courses {
                    let lecturer = course
                        .assigned_faculty_id()
                        .map_or_else(|| "–".dim(), ToString::to_string);
                    println!(
                        "{:<8} {:<28} {:>7} {:>8}  {lecturer}",
                        course.code(),
                        course.title(),
                        course.credits().to_string(),
                        course.enrolled_student_ids().len()
                    );
                }
            }
        }
        Ok(())
    }
}
