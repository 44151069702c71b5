//! Student, course and grade records with whole-file JSON persistence.
//!
//! ## Storage Layout
//!
//! The whole store lives in one JSON file (default `students.json`):
//!
//! ```text
//! {
//!     "students": [
//!         { "name": "...", "student_id": "...", "courses": { "<code>": <grade or null> } }
//!     ],
//!     "courses": [
//!         { "course_name": "...", "course_code": "..." }
//!     ]
//! }
//! ```
//!
//! Saving overwrites the file; a missing file loads as an empty store.

mod records;
mod store;
mod wire;

pub use records::{Course, Grade, Person, Student};
pub use store::GradeBook;
pub use wire::{GradebookContents, GradebookFile};
