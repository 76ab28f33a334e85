pub mod course;
pub mod department;
pub mod enrollment;
pub mod prerequisite;
pub mod student;

pub use course as courses;
pub use department as departments;
pub use enrollment as enrolled;
pub use prerequisite as prerequisites;
pub use student as students;
