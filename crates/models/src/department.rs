use serde::{Deserialize, Serialize};

/// A department to be inserted into the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDepartment {
    pub dept_id: String,
    pub dept_name: String,
    pub dean_name: Option<String>,
    pub building: Option<String>,
    pub room: Option<i32>,
}

impl NewDepartment {
    pub fn new(
        dept_id: &str,
        dept_name: &str,
        dean_name: Option<&str>,
        building: Option<&str>,
        room: Option<i32>,
    ) -> Self {
        Self {
            dept_id: dept_id.to_string(),
            dept_name: dept_name.to_string(),
            dean_name: dean_name.map(str::to_string),
            building: building.map(str::to_string),
            room,
        }
    }
}
