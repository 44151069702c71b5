//! Constants used throughout the casebook core crate.
//!
//! User-facing messages live here so the CLI and the tests agree on the exact wording.

/// Default filename for the gradebook when no explicit path is configured.
pub const DEFAULT_GRADEBOOK_FILENAME: &str = "students.json";

/// Environment variable that overrides the gradebook location.
pub const GRADEBOOK_FILE_ENV: &str = "CASEBOOK_GRADEBOOK_FILE";

/// Header line of a ranked condition report.
pub const REPORT_HEADER: &str = "Possible conditions based on your symptoms:";

/// Sentinel report returned when no condition shares a symptom with the input.
pub const NO_MATCH_MESSAGE: &str =
    "Your symptoms don't match anything specific. Please see a doctor if you feel unwell.";

/// Shown by the presentation layer when the user finished without entering anything.
pub const NO_SYMPTOMS_MESSAGE: &str =
    "You didn't enter any symptoms. Please talk to a healthcare provider if you feel unwell.";

/// Substituted when the symptom log has no entries.
pub const EMPTY_LOG_MESSAGE: &str = "No symptoms logged yet.";

/// Substituted when the glossary has no entry for a symptom.
pub const NO_DEFINITION_MESSAGE: &str = "No definition available.";

/// Returned by the gradebook for an unknown student id.
pub const STUDENT_NOT_FOUND_MESSAGE: &str = "Student not found.";

/// Rendered in place of a grade for an ungraded enrollment.
pub const GRADE_NOT_ASSIGNED: &str = "Not Assigned";
