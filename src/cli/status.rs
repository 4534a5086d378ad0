use std::path::PathBuf;

use clap::Parser;
use roster::Store;
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

#[derive(Debug, Parser, Default)]
#[command(about = "Show record and relationship counts")]
pub struct Status {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Copy)]
struct Counts {
    students: usize,
    faculty: usize,
    courses: usize,
    enrollments: usize,
    assignments: usize,
}

impl Status {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let store = Store::open(root)?;
        let registry = store.registry();

        let counts = Counts {
            students: registry.student_count(),
            faculty: registry.faculty_count(),
            courses: registry.course_count(),
            enrollments: registry.enrollments().count(),
            assignments: registry.assignments().count(),
        };

        match self.output {
            OutputFormat::Json => Self::output_json(counts)?,
            OutputFormat::Table if self.quiet => Self::output_quiet(counts),
            OutputFormat::Table => {
                if counts.students + counts.faculty + counts.courses == 0 {
                    println!("No records found yet. Create one with 'roster student add'.");
                } else {
                    Self::output_table(counts);
                }
            }
        }

        Ok(())
    }

    fn output_json(counts: Counts) -> anyhow::Result<()> {
        use serde_json::json;

        let output = json!({
            "students": counts.students,
            "faculty": counts.faculty,
            "courses": counts.courses,
            "enrollments": counts.enrollments,
            "assignments": counts.assignments,
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_quiet(counts: Counts) {
        println!(
            "students={} faculty={} courses={} enrollments={} assignments={}",
            counts.students, counts.faculty, counts.courses, counts.enrollments, counts.assignments
        );
    }

    fn output_table(counts: Counts) {
        let rows = [
            ("Students", counts.students),
            ("Faculty", counts.faculty),
            ("Courses", counts.courses),
            ("Enrollments", counts.enrollments),
            ("Assignments", counts.assignments),
        ];

        println!("{}", "Roster status".heading());
        println!("{}", "─────────────".dim());

        if is_narrow() {
            for (label, count) in rows {
                println!("{label}: {count}");
            }
        } else {
            for (label, count) in rows {
                println!("{label:<12} {count:>6}");
            }
        }
    }
}
