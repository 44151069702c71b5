//! # Casebook Core
//!
//! Core logic for the casebook tools:
//! - [`symptoms`]: rank a fixed table of condition profiles against reported symptoms, with
//!   an optional snapshot log and a symptom glossary
//! - [`gradebook`]: student, course and grade records with JSON file persistence
//!
//! **No presentation concerns**: prompting, argument parsing and printing belong in
//! `casebook-cli`. Everything here takes and returns plain values and text.

pub mod config;
pub mod constants;
pub mod error;
pub mod gradebook;
pub mod symptoms;

pub use casebook_types::{NonEmptyText, Symptom, TextError};
pub use config::CoreConfig;
pub use error::{CasebookError, CasebookResult};
pub use gradebook::{Course, GradeBook, Student};
pub use symptoms::{check_symptoms, CheckerSession, MatchOutcome, SymptomSet};
