use serde::{Deserialize, Serialize};

/// A course offered by a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub dept_id: String,
    pub course_id: String,
    pub course_name: String,
    /// Duration of the course in hours
    pub hour: Option<i32>,
}

impl NewCourse {
    pub fn new(dept_id: &str, course_id: &str, course_name: &str, hour: Option<i32>) -> Self {
        Self {
            dept_id: dept_id.to_string(),
            course_id: course_id.to_string(),
            course_name: course_name.to_string(),
            hour,
        }
    }
}
