//! Symptom checking.
//!
//! A user session collects symptoms into a [`SymptomSet`]; the [`matcher`] ranks the built-in
//! [`conditions`] against that set. Logging is layered on by composition in
//! [`CheckerSession`] rather than being part of the matcher.

pub mod conditions;
pub mod entered;
pub mod glossary;
pub mod log;
pub mod matcher;
pub mod session;

pub use conditions::{ConditionProfile, CONDITIONS};
pub use entered::SymptomSet;
pub use log::{Snapshot, SymptomLog};
pub use matcher::{check_symptoms, rank_conditions, ConditionMatch, MatchOutcome};
pub use session::CheckerSession;
