//! On-disk JSON representation of the gradebook.
//!
//! Wire structs mirror the file exactly and stay private; callers work with the domain
//! records in [`super::records`].

use super::records::{Course, Grade, Person, Student};
use crate::{CasebookError, CasebookResult, NonEmptyText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Records read from, or about to be written to, a gradebook file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GradebookContents {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
}

/// Gradebook file operations.
///
/// Zero-sized namespace for parsing and rendering the JSON text.
pub struct GradebookFile;

impl GradebookFile {
    /// Parse gradebook JSON text.
    ///
    /// Missing `students` or `courses` lists are treated as empty and keys the gradebook does
    /// not use are ignored. On a schema mismatch the error names the failing field path
    /// (e.g. `students[0].student_id`).
    ///
    /// # Errors
    ///
    /// Returns `CasebookError::Deserialization` if the text is not valid gradebook JSON.
    pub fn parse(json_text: &str) -> CasebookResult<GradebookContents> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);

        let wire = match serde_path_to_error::deserialize::<_, GradebookWire>(&mut deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(CasebookError::Deserialization(format!(
                    "gradebook schema mismatch at {path}: {source}"
                )));
            }
        };

        deserializer
            .end()
            .map_err(|e| CasebookError::Deserialization(e.to_string()))?;

        Ok(wire_to_domain(wire))
    }

    /// Render the gradebook as JSON text indented with four spaces.
    ///
    /// # Errors
    ///
    /// Returns `CasebookError::Serialization` if serialisation fails.
    pub fn render<'a>(
        students: impl IntoIterator<Item = &'a Student>,
        courses: impl IntoIterator<Item = &'a Course>,
    ) -> CasebookResult<String> {
        let wire = GradebookWire {
            students: students.into_iter().map(student_to_wire).collect(),
            courses: courses.into_iter().map(course_to_wire).collect(),
        };

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        wire.serialize(&mut serializer)
            .map_err(CasebookError::Serialization)?;

        String::from_utf8(buf).map_err(|e| CasebookError::InvalidInput(e.to_string()))
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
struct GradebookWire {
    #[serde(default)]
    students: Vec<StudentWire>,
    #[serde(default)]
    courses: Vec<CourseWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
struct StudentWire {
    name: NonEmptyText,
    student_id: NonEmptyText,
    #[serde(default)]
    courses: BTreeMap<String, Option<Grade>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
struct CourseWire {
    course_name: NonEmptyText,
    course_code: NonEmptyText,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn wire_to_domain(wire: GradebookWire) -> GradebookContents {
    GradebookContents {
        students: wire
            .students
            .into_iter()
            .map(|s| Student {
                person: Person {
                    name: s.name,
                    student_id: s.student_id,
                },
                courses: s.courses,
            })
            .collect(),
        courses: wire
            .courses
            .into_iter()
            .map(|c| Course::new(c.course_name, c.course_code))
            .collect(),
    }
}

fn student_to_wire(student: &Student) -> StudentWire {
    StudentWire {
        name: student.person.name.clone(),
        student_id: student.person.student_id.clone(),
        courses: student.courses.clone(),
    }
}

fn course_to_wire(course: &Course) -> CourseWire {
    CourseWire {
        course_name: course.course_name.clone(),
        course_code: course.course_code.clone(),
    }
}
