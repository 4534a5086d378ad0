use std::{
    io::{self, BufRead},
    path::PathBuf,
};

mod assign;
mod calc;
mod course;
mod drop;
mod enroll;
mod faculty;
mod init;
mod password;
mod roster;
mod status;
mod student;
mod terminal;
mod unassign;

use clap::ArgAction;
use status::Status;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the root of the roster directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Status(Status::default()))
            .run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show registry counts (default)
    Status(Status),

    /// Initialize a new roster with the sample records
    Init(init::Command),

    /// Add, remove, show and list students
    Student(student::Command),

    /// Add, remove, show and list faculty
    Faculty(faculty::Command),

    /// Add, remove, show and list courses
    Course(course::Command),

    /// Enroll a student in a course
    Enroll(enroll::Command),

    /// Drop a student from a course
    Drop(drop::Command),

    /// Assign a faculty member to teach a course
    ///
    /// A course taught by someone else is reassigned.
    Assign(assign::Command),

    /// Remove a faculty member from a course
    Unassign(unassign::Command),

    /// Show the students enrolled in a course
    Roster(roster::Command),

    /// Generate a random password
    Password(password::Command),

    /// Evaluate an arithmetic expression
    Calc(calc::Command),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Status(command) => command.run(root)?,
            Self::Init(command) => command.run(&root)?,
            Self::Student(command) => command.run(root)?,
            Self::Faculty(command) => command.run(root)?,
            Self::Course(command) => command.run(root)?,
            Self::Enroll(command) => command.run(root)?,
            Self::Drop(command) => command.run(root)?,
            Self::Assign(command) => command.run(root)?,
            Self::Unassign(command) => command.run(root)?,
            Self::Roster(command) => command.run(root)?,
            Self::Password(command) => command.run(&root)?,
            Self::Calc(command) => command.run(),
        }
        Ok(())
    }
}

/// Trim a free-text field, rejecting one that is left empty.
fn non_blank(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Please fill in all fields.".to_string());
    }
    Ok(trimmed.to_string())
}

/// Output format for commands that print records.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

fn prompt_to_proceed() -> io::Result<()> {
    eprint!("\nProceed? (y/N) ");
    let stdin = std::io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    if !line.trim().eq_ignore_ascii_case("y") {
        println!("Cancelled");
        std::process::exit(130);
    }
    Ok(())
}
