use crate::{cli::Command, prompt::Prompter, request::Request};
use anyhow::Result;
use models::{
    course::NewCourse,
    department::NewDepartment,
    enrollment::{GradeUpdate, NewEnrollment},
    input::{current_year, normalize, normalize_optional, parse_int, parse_int_or},
    prerequisite::{DEFAULT_MIN_GRADE, NewPrerequisite},
    student::NewStudent,
};

const DECLINED: &str = "Okay. Thank you!";

/// What the operator asked for once all prompts are answered
#[derive(Debug, PartialEq)]
pub enum Form {
    Submit(Request),
    /// Nothing to run; the message explains why
    Cancel(&'static str),
}

/// Collects the answers a command needs and turns them into a request
pub fn gather(command: &Command, prompter: &mut dyn Prompter) -> Result<Form> {
    match command {
        Command::ResetDb {
            no_data_seed,
            yes,
            script,
        } => {
            if !*yes && !prompter.confirm("Are you sure? This will delete all the data.")? {
                return Ok(Form::Cancel("Database reset aborted"));
            }
            Ok(Form::Submit(Request::Reset {
                script: script.clone(),
                seed: !*no_data_seed,
            }))
        }
        Command::AddDepartment => confirmed(prompter, "Do you want to add a department?", department),
        Command::ShowDepartment => {
            let name = filter(
                prompter,
                "Do you want to see one particular department? Enter department name:",
            )?;
            Ok(Form::Submit(Request::ShowDepartments(name)))
        }
        Command::AddCourse => confirmed(prompter, "Do you want to add a course?", course),
        Command::ShowCourse => {
            let dept_id = filter(prompter, "Enter department ID:")?;
            Ok(Form::Submit(Request::ShowCourses(dept_id)))
        }
        Command::AddStudent => confirmed(prompter, "Do you want to add a student?", student),
        Command::ShowStudent => {
            let name = filter(prompter, "Search for student's name:")?;
            Ok(Form::Submit(Request::ShowStudents(name)))
        }
        Command::AddPrereq => confirmed(
            prompter,
            "Do you want to add prerequisite for a course?",
            prerequisite,
        ),
        Command::ShowPrereq => {
            let course_id = filter(prompter, "Enter course ID:")?;
            Ok(Form::Submit(Request::ShowPrerequisites(course_id)))
        }
        Command::EnrollStudent => {
            confirmed(prompter, "Do you want to enroll a student?", enrollment)
        }
        Command::ShowEnrolled => {
            let student_id = filter(prompter, "Enter student ID:")?;
            Ok(Form::Submit(Request::ShowEnrollments(student_id)))
        }
        Command::UpdateGrade => {
            if !prompter.confirm("Do you want to update course grade?")? {
                return Ok(Form::Cancel(DECLINED));
            }
            grade_update(prompter)
        }
        Command::ShowTranscript => match filter(prompter, "Enter your student id:")? {
            Some(student_id) => Ok(Form::Submit(Request::ShowTranscript(student_id))),
            None => Ok(Form::Cancel(DECLINED)),
        },
    }
}

/// Asks for confirmation, then fills in the rest of the form
fn confirmed<F>(prompter: &mut dyn Prompter, question: &str, fill: F) -> Result<Form>
where
    F: FnOnce(&mut dyn Prompter) -> Result<Request>,
{
    if !prompter.confirm(question)? {
        return Ok(Form::Cancel(DECLINED));
    }
    Ok(Form::Submit(fill(prompter)?))
}

/// An optional lookup key; blank means "show everything"
fn filter(prompter: &mut dyn Prompter, question: &str) -> Result<Option<String>> {
    Ok(normalize_optional(&prompter.text(question)?))
}

fn required(prompter: &mut dyn Prompter, question: &str) -> Result<String> {
    Ok(normalize(&prompter.text(question)?))
}

fn department(prompter: &mut dyn Prompter) -> Result<Request> {
    let dept_id = required(prompter, "Enter department ID:")?;
    let dept_name = required(prompter, "Enter department name:")?;
    let dean_name = normalize_optional(
        &prompter.text("Enter dean name of the department (optional):")?,
    );
    let building = normalize_optional(&prompter.text("Enter building name (optional):")?);
    let room = parse_int(&prompter.text("Enter room number (optional):")?);

    Ok(Request::AddDepartment(NewDepartment {
        dept_id,
        dept_name,
        dean_name,
        building,
        room,
    }))
}

fn course(prompter: &mut dyn Prompter) -> Result<Request> {
    let dept_id = required(prompter, "Enter department ID:")?;
    let course_id = required(prompter, "Enter course ID:")?;
    let course_name = required(prompter, "Enter course name:")?;
    let hour = parse_int(&prompter.text("Enter the duration of the course in hour:")?);

    Ok(Request::AddCourse(NewCourse {
        dept_id,
        course_id,
        course_name,
        hour,
    }))
}

fn student(prompter: &mut dyn Prompter) -> Result<Request> {
    let student_id = required(prompter, "Enter student id:")?;
    let first_name = required(prompter, "Enter student's first name:")?;
    let last_name = required(prompter, "Enter student's last name:")?;

    Ok(Request::AddStudent(NewStudent {
        student_id,
        first_name,
        last_name,
    }))
}

fn prerequisite(prompter: &mut dyn Prompter) -> Result<Request> {
    let course_id = required(prompter, "Enter course ID:")?;
    let course_prereq_id = required(prompter, "Enter course prerequisite:")?;
    let min_grade = parse_int_or(
        &prompter.text("Enter the minimum grade for the course:")?,
        DEFAULT_MIN_GRADE,
    );

    Ok(Request::AddPrerequisite(NewPrerequisite {
        course_id,
        course_prereq_id,
        min_grade,
    }))
}

fn enrollment(prompter: &mut dyn Prompter) -> Result<Request> {
    let student_id = required(prompter, "Enter your student id:")?;
    let course_id = required(prompter, "Enter your course id you want to enroll:")?;

    Ok(Request::Enroll(NewEnrollment::this_year(
        &student_id,
        &course_id,
    )))
}

fn grade_update(prompter: &mut dyn Prompter) -> Result<Form> {
    let student_id = required(prompter, "Enter your student id:")?;
    let course_id = required(prompter, "Enter the course id:")?;
    let year = parse_int_or(&prompter.text("Enter the year:")?, current_year());

    let Some(grade) = parse_int(&prompter.text("Enter your grade:")?) else {
        return Ok(Form::Cancel("Grade must be a whole number. Nothing was updated."));
    };

    Ok(Form::Submit(Request::UpdateGrade(GradeUpdate {
        student_id,
        course_id,
        year,
        grade,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::LinePrompter;
    use std::{io::Cursor, path::PathBuf};

    fn gather_with(command: Command, answers: &str) -> Form {
        let mut prompter = LinePrompter::new(Cursor::new(answers.to_string()));
        gather(&command, &mut prompter).unwrap()
    }

    #[test]
    fn test_add_department_normalizes_answers() {
        let form = gather_with(
            Command::AddDepartment,
            "y\nCS\nComputer Science\nRubio\n Ajax \n100\n",
        );

        assert_eq!(
            form,
            Form::Submit(Request::AddDepartment(NewDepartment::new(
                "cs",
                "computer science",
                Some("rubio"),
                Some("ajax"),
                Some(100),
            )))
        );
    }

    #[test]
    fn test_add_department_optional_fields() {
        let form = gather_with(Command::AddDepartment, "y\nie\nindustrial engineering\n\n\nB12\n");

        assert_eq!(
            form,
            Form::Submit(Request::AddDepartment(NewDepartment::new(
                "ie",
                "industrial engineering",
                None,
                None,
                None,
            )))
        );
    }

    #[test]
    fn test_add_declined() {
        for command in [
            Command::AddDepartment,
            Command::AddCourse,
            Command::AddStudent,
            Command::AddPrereq,
            Command::EnrollStudent,
            Command::UpdateGrade,
        ] {
            assert_eq!(gather_with(command, "n\n"), Form::Cancel(DECLINED));
        }
    }

    #[test]
    fn test_add_course_bad_hours() {
        let form = gather_with(Command::AddCourse, "y\ncs\ncs301\nCompilers\nfour\n");

        assert_eq!(
            form,
            Form::Submit(Request::AddCourse(NewCourse::new(
                "cs",
                "cs301",
                "compilers",
                None
            )))
        );
    }

    #[test]
    fn test_add_prereq_min_grade_fallback() {
        let form = gather_with(Command::AddPrereq, "y\ncs202\ncs201\nhigh\n");
        assert_eq!(
            form,
            Form::Submit(Request::AddPrerequisite(NewPrerequisite::new(
                "cs202",
                "cs201",
                DEFAULT_MIN_GRADE
            )))
        );

        let form = gather_with(Command::AddPrereq, "y\ncs202\ncs201\n80\n");
        assert_eq!(
            form,
            Form::Submit(Request::AddPrerequisite(NewPrerequisite::new(
                "cs202", "cs201", 80
            )))
        );
    }

    #[test]
    fn test_enroll_uses_current_year() {
        let form = gather_with(Command::EnrollStudent, "y\nTB01\nCS101\n");
        assert_eq!(
            form,
            Form::Submit(Request::Enroll(NewEnrollment::new(
                "tb01",
                "cs101",
                current_year()
            )))
        );
    }

    #[test]
    fn test_update_grade_year_fallback() {
        let form = gather_with(Command::UpdateGrade, "y\ntb01\ncs101\n\n91\n");
        assert_eq!(
            form,
            Form::Submit(Request::UpdateGrade(GradeUpdate {
                student_id: "tb01".to_string(),
                course_id: "cs101".to_string(),
                year: current_year(),
                grade: 91,
            }))
        );
    }

    #[test]
    fn test_update_grade_rejects_bad_grade() {
        let form = gather_with(Command::UpdateGrade, "y\ntb01\ncs101\n2023\nA+\n");
        assert!(matches!(form, Form::Cancel(_)));
    }

    #[test]
    fn test_show_filters() {
        assert_eq!(
            gather_with(Command::ShowDepartment, "Computer Science\n"),
            Form::Submit(Request::ShowDepartments(Some(
                "computer science".to_string()
            )))
        );
        assert_eq!(
            gather_with(Command::ShowDepartment, "\n"),
            Form::Submit(Request::ShowDepartments(None))
        );
        assert_eq!(
            gather_with(Command::ShowStudent, " Tom \n"),
            Form::Submit(Request::ShowStudents(Some("tom".to_string())))
        );
        assert_eq!(
            gather_with(Command::ShowEnrolled, "\n"),
            Form::Submit(Request::ShowEnrollments(None))
        );
    }

    #[test]
    fn test_show_transcript_requires_student() {
        assert_eq!(
            gather_with(Command::ShowTranscript, "\n"),
            Form::Cancel(DECLINED)
        );
        assert_eq!(
            gather_with(Command::ShowTranscript, "TB01\n"),
            Form::Submit(Request::ShowTranscript("tb01".to_string()))
        );
    }

    #[test]
    fn test_reset_confirmation() {
        let reset = |yes| Command::ResetDb {
            no_data_seed: false,
            yes,
            script: PathBuf::from("schema.sql"),
        };

        assert_eq!(
            gather_with(reset(false), "n\n"),
            Form::Cancel("Database reset aborted")
        );
        assert_eq!(
            gather_with(reset(false), "y\n"),
            Form::Submit(Request::Reset {
                script: PathBuf::from("schema.sql"),
                seed: true,
            })
        );
        assert_eq!(
            gather_with(reset(true), ""),
            Form::Submit(Request::Reset {
                script: PathBuf::from("schema.sql"),
                seed: true,
            })
        );
    }
}
