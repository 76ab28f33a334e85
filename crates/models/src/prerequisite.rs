use serde::{Deserialize, Serialize};

/// Minimum grade used when the operator does not give a usable one
pub const DEFAULT_MIN_GRADE: i32 = 50;

/// Links a course to a course that must be passed before it.
///
/// The link is only recorded; nothing checks it when a student enrolls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrerequisite {
    pub course_id: String,
    pub course_prereq_id: String,
    pub min_grade: i32,
}

impl NewPrerequisite {
    pub fn new(course_id: &str, course_prereq_id: &str, min_grade: i32) -> Self {
        Self {
            course_id: course_id.to_string(),
            course_prereq_id: course_prereq_id.to_string(),
            min_grade,
        }
    }
}
