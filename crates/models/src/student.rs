use serde::{Deserialize, Serialize};

/// A student to be inserted. The GPA is maintained by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewStudent {
    pub fn new(student_id: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}
