use crate::input::current_year;
use serde::{Deserialize, Serialize};

/// Enrolls a student in a course for a given year, ungraded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnrollment {
    pub student_id: String,
    pub course_id: String,
    pub year: i32,
}

impl NewEnrollment {
    pub fn new(student_id: &str, course_id: &str, year: i32) -> Self {
        Self {
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
            year,
        }
    }

    /// Enrollment dated to the current calendar year
    pub fn this_year(student_id: &str, course_id: &str) -> Self {
        Self::new(student_id, course_id, current_year())
    }
}

/// Sets the grade of the enrollment identified by student, course and year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeUpdate {
    pub student_id: String,
    pub course_id: String,
    pub year: i32,
    pub grade: i32,
}
