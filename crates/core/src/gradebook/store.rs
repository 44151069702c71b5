//! The in-memory gradebook and its JSON file persistence.
//!
//! Loading merges into the current store by key; saving writes the whole store.

use super::records::{Course, Grade, Student};
use super::wire::GradebookFile;
use crate::config::CoreConfig;
use crate::constants::{GRADE_NOT_ASSIGNED, STUDENT_NOT_FOUND_MESSAGE};
use crate::{CasebookError, CasebookResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// In-memory store of students and courses, keyed by student id and course code.
///
/// Mutations never fail: duplicates and references to unknown ids are ignored and reported
/// through the `bool` return value only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GradeBook {
    students: BTreeMap<String, Student>,
    courses: BTreeMap<String, Course>,
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated from the configured gradebook file.
    ///
    /// # Errors
    ///
    /// See [`load_from_file`](GradeBook::load_from_file).
    pub fn open(cfg: &CoreConfig) -> CasebookResult<Self> {
        let mut gradebook = Self::new();
        gradebook.load_from_file(cfg.gradebook_path())?;
        Ok(gradebook)
    }

    /// Writes the store to the configured gradebook file.
    pub fn save(&self, cfg: &CoreConfig) -> CasebookResult<()> {
        self.save_to_file(cfg.gradebook_path())
    }

    /// Adds `student` unless the id is already taken.
    pub fn add_student(&mut self, student: Student) -> bool {
        let id = student.student_id().to_string();
        if self.students.contains_key(&id) {
            tracing::debug!("student {id} already exists, ignoring");
            return false;
        }
        self.students.insert(id, student);
        true
    }

    /// Adds `course` unless the code is already taken.
    pub fn add_course(&mut self, course: Course) -> bool {
        let code = course.code().to_string();
        if self.courses.contains_key(&code) {
            tracing::debug!("course {code} already exists, ignoring");
            return false;
        }
        self.courses.insert(code, course);
        true
    }

    /// Enrolls a student in a course as ungraded.
    ///
    /// Both the student and the course must exist. Re-enrolling keeps the existing grade.
    pub fn enroll_student(&mut self, student_id: &str, course_code: &str) -> bool {
        if !self.courses.contains_key(course_code) {
            tracing::debug!("enroll: unknown course {course_code}");
            return false;
        }
        match self.students.get_mut(student_id) {
            Some(student) => student.enroll(course_code),
            None => {
                tracing::debug!("enroll: unknown student {student_id}");
                false
            }
        }
    }

    /// Sets a grade; only takes effect if the student is already enrolled in the course.
    pub fn assign_grade(&mut self, student_id: &str, course_code: &str, grade: Grade) -> bool {
        let applied = self
            .students
            .get_mut(student_id)
            .is_some_and(|student| student.assign_grade(course_code, grade));
        if !applied {
            tracing::debug!("assign_grade: {student_id} is not enrolled in {course_code}");
        }
        applied
    }

    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    pub fn course(&self, course_code: &str) -> Option<&Course> {
        self.courses.get(course_code)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Renders a student's record, or [`STUDENT_NOT_FOUND_MESSAGE`].
    ///
    /// Enrollments that reference a course missing from the store show the course code in
    /// place of its name.
    pub fn get_student_info(&self, student_id: &str) -> String {
        let Some(student) = self.students.get(student_id) else {
            return STUDENT_NOT_FOUND_MESSAGE.to_string();
        };

        let mut info = format!(
            "Name: {}\nID: {}\nCourses:\n",
            student.name(),
            student.student_id()
        );
        for (code, grade) in &student.courses {
            let course_name = match self.courses.get(code) {
                Some(course) => course.course_name.as_str(),
                None => {
                    tracing::warn!("student {student_id} is enrolled in unknown course {code}");
                    code.as_str()
                }
            };
            let grade = grade.map_or_else(|| GRADE_NOT_ASSIGNED.to_string(), |g| g.to_string());
            info.push_str(&format!("- {course_name} ({code}): {grade}\n"));
        }
        info
    }

    /// Overwrites `path` with the whole store.
    ///
    /// # Errors
    ///
    /// Returns `CasebookError` if serialisation or the write fails.
    pub fn save_to_file(&self, path: &Path) -> CasebookResult<()> {
        let json = GradebookFile::render(self.students.values(), self.courses.values())?;
        fs::write(path, json).map_err(CasebookError::FileWrite)?;
        tracing::info!(
            students = self.students.len(),
            courses = self.courses.len(),
            "saved gradebook to {}",
            path.display()
        );
        Ok(())
    }

    /// Loads `path` into the store, replacing entries that share a key.
    ///
    /// A missing file is not an error and leaves the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CasebookError` if the file exists but cannot be read or parsed.
    pub fn load_from_file(&mut self, path: &Path) -> CasebookResult<()> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("no gradebook at {}, starting empty", path.display());
                return Ok(());
            }
            Err(e) => return Err(CasebookError::FileRead(e)),
        };

        let loaded = GradebookFile::parse(&contents)?;
        tracing::info!(
            students = loaded.students.len(),
            courses = loaded.courses.len(),
            "loaded gradebook from {}",
            path.display()
        );

        for student in loaded.students {
            self.students
                .insert(student.student_id().to_string(), student);
        }
        for course in loaded.courses {
            self.courses.insert(course.code().to_string(), course);
        }
        Ok(())
    }
}
