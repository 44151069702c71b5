//! Gradebook domain records.

use crate::NonEmptyText;
use std::collections::BTreeMap;

/// Numeric grade for one enrollment.
pub type Grade = i32;

/// Identity shared by everyone in the gradebook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: NonEmptyText,
    pub student_id: NonEmptyText,
}

/// A person plus their enrollments.
///
/// `courses` maps a course code to its grade; `None` means enrolled but not yet graded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    pub person: Person,
    pub courses: BTreeMap<String, Option<Grade>>,
}

impl Student {
    pub fn new(name: NonEmptyText, student_id: NonEmptyText) -> Self {
        Self {
            person: Person { name, student_id },
            courses: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.person.name.as_str()
    }

    pub fn student_id(&self) -> &str {
        self.person.student_id.as_str()
    }

    pub fn is_enrolled(&self, course_code: &str) -> bool {
        self.courses.contains_key(course_code)
    }

    /// Enrolls in `course_code` as ungraded. An existing enrollment (and its grade) is kept.
    pub fn enroll(&mut self, course_code: &str) -> bool {
        if self.is_enrolled(course_code) {
            return false;
        }
        self.courses.insert(course_code.to_string(), None);
        true
    }

    /// Sets the grade for an existing enrollment; ignored otherwise.
    pub fn assign_grade(&mut self, course_code: &str, grade: Grade) -> bool {
        match self.courses.get_mut(course_code) {
            Some(slot) => {
                *slot = Some(grade);
                true
            }
            None => false,
        }
    }

    pub fn grade(&self, course_code: &str) -> Option<Grade> {
        self.courses.get(course_code).copied().flatten()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub course_name: NonEmptyText,
    pub course_code: NonEmptyText,
}

impl Course {
    pub fn new(course_name: NonEmptyText, course_code: NonEmptyText) -> Self {
        Self {
            course_name,
            course_code,
        }
    }

    pub fn code(&self) -> &str {
        self.course_code.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> NonEmptyText {
        NonEmptyText::new(s).unwrap()
    }

    #[test]
    fn test_enroll_keeps_existing_grade() {
        let mut student = Student::new(text("Ada"), text("s1"));
        assert!(student.enroll("CS101"));
        assert!(student.assign_grade("CS101", 91));
        assert!(!student.enroll("CS101"));
        assert_eq!(student.grade("CS101"), Some(91));
    }

    #[test]
    fn test_assign_grade_requires_enrollment() {
        let mut student = Student::new(text("Ada"), text("s1"));
        assert!(!student.assign_grade("CS101", 80));
        assert!(!student.is_enrolled("CS101"));
        assert_eq!(student.grade("CS101"), None);
    }
}
