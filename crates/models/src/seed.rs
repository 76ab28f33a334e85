//! Sample rows used to repopulate a freshly reset registry.
//!
//! The keys are fixed, so seeding a registry that already holds these rows
//! collides on every primary key.

use crate::{
    course::NewCourse, department::NewDepartment, prerequisite::NewPrerequisite,
    student::NewStudent,
};

pub fn departments() -> Vec<NewDepartment> {
    vec![
        NewDepartment::new("cs", "computer science", Some("rubio"), Some("ajax"), Some(100)),
        NewDepartment::new("math", "mathematics", Some("carson"), Some("acme"), Some(300)),
        NewDepartment::new(
            "ee",
            "electrical engineering",
            Some("kasich"),
            Some("ajax"),
            Some(200),
        ),
        NewDepartment::new("ie", "industrial engineering", Some("cruz"), None, Some(200)),
        NewDepartment::new("music", "musicology", Some("costello"), Some("north"), Some(100)),
    ]
}

pub fn courses() -> Vec<NewCourse> {
    vec![
        NewCourse::new("cs", "cs101", "programming", Some(4)),
        NewCourse::new("cs", "cs201", "algorithms", Some(3)),
        NewCourse::new("cs", "cs202", "systems", Some(3)),
        NewCourse::new("math", "math101", "algebra", Some(3)),
        NewCourse::new("math", "math201", "calculus", Some(4)),
        NewCourse::new("math", "math301", "analysis", Some(4)),
        NewCourse::new("ee", "ee102", "circuits", Some(3)),
        NewCourse::new("ie", "ie101", "probability", Some(3)),
        NewCourse::new("ie", "ie102", "statistics", Some(3)),
        NewCourse::new("music", "music104", "jazz", Some(3)),
    ]
}

pub fn prerequisites() -> Vec<NewPrerequisite> {
    vec![
        NewPrerequisite::new("cs202", "cs201", 75),
        NewPrerequisite::new("cs201", "cs101", 75),
        NewPrerequisite::new("math301", "math201", 70),
        NewPrerequisite::new("math201", "math101", 70),
    ]
}

pub fn students() -> Vec<NewStudent> {
    vec![
        NewStudent::new("tb01", "tom", "bush"),
        NewStudent::new("ch01", "cruz", "hening"),
        NewStudent::new("cs01", "clinton", "smith"),
        NewStudent::new("es01", "evan", "sanders"),
    ]
}
