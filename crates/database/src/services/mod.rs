pub mod course;
pub mod department;
pub mod enrollment;
pub mod prerequisite;
pub mod reset;
pub mod student;
