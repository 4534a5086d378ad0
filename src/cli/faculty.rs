use std::path::PathBuf;

use roster::{Faculty, FacultyId, RegistryError, Store};
use tracing::instrument;

use crate::cli::{
    OutputFormat, non_blank, prompt_to_proceed,
    terminal::{Colorize, is_narrow, join_or_dash},
};

#[derive(Debug, clap::Parser)]
pub struct Command {
    #[command(subcommand)]
    command: FacultyCommand,
}

#[derive(Debug, clap::Parser)]
enum FacultyCommand {
    /// Register a new faculty member
    Add(Add),

    /// Remove a faculty member and vacate the courses they teach
    Remove(Remove),

    /// Show a single faculty member
    Show(Show),

    /// List all faculty
    List(List),

    /// Move a faculty member to another department
    SetDepartment(SetDepartment),
}

impl Command {
    #[instrument]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut store = Store::open(root)?;

        match self.command {
            FacultyCommand::Add(add) => add.run(&mut store),
            FacultyCommand::Remove(remove) => remove.run(&mut store),
            FacultyCommand::Show(show) => show.run(&store),
            FacultyCommand::List(list) => list.run(&store),
            FacultyCommand::SetDepartment(set) => set.run(&mut store),
        }
    }
}

#[derive(Debug, clap::Parser)]
struct Add {
    /// Faculty ID (e.g. F003)
    id: FacultyId,

    /// Full name, including any title
    #[arg(value_parser = non_blank)]
    name: String,

    /// Department
    #[arg(value_parser = non_blank)]
    department: String,
}

impl Add {
    fn run(self, store: &mut Store) -> anyhow::Result<()> {
        let faculty = Faculty::new(self.id.clone(), self.name, self.department);
        store.registry_mut().insert_faculty(faculty)?;
        store.flush()?;

        println!("{}", format!("✅ Added faculty {}", self.id).success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
struct Remove {
    /// Faculty ID
    id: FacultyId,

    /// Skip confirmation prompts
    #[arg(long, short)]
    yes: bool,
}

impl Remove {
    fn run(self, store: &mut Store) -> anyhow::Result<()> {
        let Some(faculty) = store.registry().get_faculty(&self.id) else {
            anyhow::bail!(RegistryError::FacultyNotFound(self.id));
        };

        if !self.yes {
            println!("Removing faculty {} ({})", faculty.id(), faculty.name());
            let courses = faculty.assigned_course_codes();
            if !courses.is_empty() {
                println!(
                    "\n{} these courses will have no lecturer: {}",
                    "⚠️".warning(),
                    join_or_dash(courses)
                );
            }
            prompt_to_proceed()?;
        }

        store.registry_mut().delete_faculty(&self.id)?;
        store.flush()?;

        println!("{}", format!("✅ Removed faculty {}", self.id).success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
struct Show {
    /// Faculty ID
    id: FacultyId,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

impl Show {
    fn run(self, store: &Store) -> anyhow::Result<()> {
        let Some(faculty) = store.registry().get_faculty(&self.id) else {
            anyhow::bail!(RegistryError::FacultyNotFound(self.id));
        };

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&faculty)?),
            OutputFormat::Pretty => {
                println!("{}", format!("# {}", faculty.id()).heading());
                println!("{}\n", faculty.name());
                println!("  Department: {}", faculty.department());
                println!(
                    "  Teaching:   {}",
                    join_or_dash(faculty.assigned_course_codes())
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
        let faculty = store.registry().get_all_faculty();

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&faculty)?),
            OutputFormat::Pretty if faculty.is_empty() => {
                println!("{}", "No faculty registered.".info());
            }
            OutputFormat::Pretty if is_narrow() => {
                for member in &faculty {
                    println!("{} {}", member.id().as_str().heading(), member.name());
                    println!("  {}", member.department().dim());
                }
            }
            OutputFormat::Pretty => {
                println!("{:<8} {:<24} {:<20} Teaching", "ID", "Name", "Department");
                for member in &faculty {
                    println!(
                        "{:<8} {:<24} {:<20} {}",
                        member.id(),
                        member.name(),
                        member.department(),
                        join_or_dash(member.assigned_course_codes())
                    );
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
struct SetDepartment {
    /// Faculty ID
    id: FacultyId,

    /// The new department
    #[arg(value_parser = non_blank)]
    department: String,
}

impl SetDepartment {
    fn run(self, store: &mut Store) -> anyhow::Result<()> {
        if !store
            .registry_mut()
            .set_faculty_department(&self.id, &self.department)
        {
            anyhow::bail!(RegistryError::FacultyNotFound(self.id));
        }
        store.flush()?;

        println!(
            "{}",
            format!("✅ {} moved to {}", self.id, self.department).success()
        );
        Ok(())
    }
}
