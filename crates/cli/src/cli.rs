use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "registry", version, about = "Administer the university registry database")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Drop and recreate every registry table, then load the sample data
    ResetDb {
        /// Leave the tables empty after the reset
        #[arg(long)]
        no_data_seed: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// SQL script that recreates the schema
        #[arg(long, env = "SCHEMA_SCRIPT", default_value = "schema.sql")]
        script: PathBuf,
    },
    /// Add a department
    AddDepartment,
    /// Show one department by name, or all of them
    ShowDepartment,
    /// Add a course to a department
    AddCourse,
    /// Show the courses of one department, or all of them
    ShowCourse,
    /// Add a student
    AddStudent,
    /// Search students by first or last name, or show all of them
    ShowStudent,
    /// Record a prerequisite for a course
    AddPrereq,
    /// Show the prerequisites of one course, or all of them
    ShowPrereq,
    /// Enroll a student in a course for the current year
    EnrollStudent,
    /// Show the enrollments of one student, or all of them
    ShowEnrolled,
    /// Set the grade of an enrollment
    UpdateGrade,
    /// Show a student's GPA and letter grade
    ShowTranscript,
}
