pub mod course;
pub mod department;
pub mod enrollment;
pub mod input;
pub mod prerequisite;
pub mod seed;
pub mod student;
