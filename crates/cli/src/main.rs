mod session;

use std::path::PathBuf;

use anyhow::Context;
use casebook_core::config::gradebook_path_from_env_value;
use casebook_core::constants::{GRADEBOOK_FILE_ENV, NO_SYMPTOMS_MESSAGE};
use casebook_core::gradebook::Grade;
use casebook_core::symptoms::glossary;
use casebook_core::{
    check_symptoms, CheckerSession, CoreConfig, Course, GradeBook, NonEmptyText, Student,
    Symptom, SymptomSet,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or cannot be parsed.
const DEFAULT_LOG_FILTER: &str = "casebook=warn";

#[derive(Parser)]
#[command(name = "casebook")]
#[command(about = "Symptom checker and student gradebook")]
struct Cli {
    /// Gradebook file (defaults to $CASEBOOK_GRADEBOOK_FILE or students.json)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank conditions for the given symptoms
    Check {
        /// Symptoms, e.g. "sore throat" fever
        symptoms: Vec<String>,
    },
    /// Start an interactive symptom session
    Session {
        /// Only accept symptoms the checker knows
        #[arg(long)]
        strict: bool,
        /// Do not keep a symptom log
        #[arg(long)]
        no_log: bool,
    },
    /// List known symptoms with their definitions
    Symptoms,
    /// Manage the student gradebook
    Gradebook {
        #[command(subcommand)]
        command: GradebookCommands,
    },
}

#[derive(Subcommand)]
enum GradebookCommands {
    /// Add a student
    AddStudent {
        /// Student name
        name: String,
        /// Student ID
        id: String,
    },
    /// Add a course
    AddCourse {
        /// Course name
        name: String,
        /// Course code
        code: String,
    },
    /// Enroll a student in a course
    Enroll {
        /// Student ID
        id: String,
        /// Course code
        code: String,
    },
    /// Assign a grade to an enrolled student
    Grade {
        /// Student ID
        id: String,
        /// Course code
        code: String,
        /// Numeric grade
        #[arg(allow_negative_numbers = true)]
        grade: Grade,
    },
    /// Show a student's record
    View {
        /// Student ID
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (symptom_log_enabled, strict) = match &cli.command {
        Some(Commands::Session { strict, no_log }) => (!*no_log, *strict),
        _ => (true, false),
    };
    let gradebook_path = cli.file.unwrap_or_else(|| {
        gradebook_path_from_env_value(std::env::var(GRADEBOOK_FILE_ENV).ok())
    });
    let cfg = CoreConfig::new(gradebook_path, symptom_log_enabled, strict)?;

    match cli.command {
        Some(Commands::Check { symptoms }) => {
            let entered: SymptomSet = symptoms
                .iter()
                .filter_map(|s| Symptom::new(s).ok())
                .collect();
            if entered.is_empty() {
                println!("{NO_SYMPTOMS_MESSAGE}");
            } else {
                println!("{}", check_symptoms(&entered));
            }
        }
        Some(Commands::Session { .. }) => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session::run(
                stdin.lock(),
                &mut stdout,
                CheckerSession::from_config(&cfg),
                cfg.restrict_to_known_symptoms(),
            )?;
        }
        Some(Commands::Symptoms) => {
            for (symptom, definition) in glossary::definitions() {
                println!("{symptom}: {definition}");
            }
        }
        Some(Commands::Gradebook { command }) => {
            run_gradebook(&cfg, command)?;
        }
        None => {
            println!("Use 'casebook --help' for commands");
        }
    }

    Ok(())
}

/// Builds the log filter from the raw `RUST_LOG` value, falling back to
/// [`DEFAULT_LOG_FILTER`].
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn run_gradebook(cfg: &CoreConfig, command: GradebookCommands) -> anyhow::Result<()> {
    let mut gradebook = GradeBook::open(cfg).with_context(|| {
        format!(
            "could not load gradebook from {}",
            cfg.gradebook_path().display()
        )
    })?;

    match command {
        GradebookCommands::AddStudent { name, id } => {
            let (Ok(name), Ok(id)) = (NonEmptyText::new(name), NonEmptyText::new(id)) else {
                eprintln!("Error: Enter name and ID.");
                return Ok(());
            };
            if gradebook.add_student(Student::new(name, id)) {
                gradebook.save(cfg)?;
                println!("Student added.");
            } else {
                println!("Student already exists.");
            }
        }
        GradebookCommands::AddCourse { name, code } => {
            let (Ok(name), Ok(code)) = (NonEmptyText::new(name), NonEmptyText::new(code)) else {
                eprintln!("Error: Enter course name and code.");
                return Ok(());
            };
            if gradebook.add_course(Course::new(name, code)) {
                gradebook.save(cfg)?;
                println!("Course added.");
            } else {
                println!("Course already exists.");
            }
        }
        GradebookCommands::Enroll { id, code } => {
            if gradebook.enroll_student(id.trim(), code.trim()) {
                gradebook.save(cfg)?;
                println!("Student enrolled.");
            } else {
                println!("Nothing changed: check the student ID and course code.");
            }
        }
        GradebookCommands::Grade { id, code, grade } => {
            if gradebook.assign_grade(id.trim(), code.trim(), grade) {
                gradebook.save(cfg)?;
                println!("Grade assigned.");
            } else {
                println!("Nothing changed: the student is not enrolled in that course.");
            }
        }
        GradebookCommands::View { id } => {
            println!("{}", gradebook.get_student_info(id.trim()).trim_end());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_log_filter_keeps_user_directives() {
        let filter = log_filter(Some("casebook=debug".to_string())).to_string();
        assert!(filter.contains("casebook=debug"), "{filter}");
        assert!(!filter.contains("casebook=warn"), "{filter}");

        let filter = log_filter(Some("debug".to_string())).to_string();
        assert!(!filter.contains("warn"), "{filter}");
    }

    #[test]
    fn test_log_filter_ignores_unparseable_value() {
        assert_eq!(
            log_filter(Some("casebook=loud".to_string())).to_string(),
            DEFAULT_LOG_FILTER
        );
    }
}
