use crate::table::{Table, TableRow};
use database::{
    entities::{courses, departments, enrolled, prerequisites, students},
    error::RegistryError,
    services::{
        course::CourseService,
        department::DepartmentService,
        enrollment::EnrollmentService,
        prerequisite::PrerequisiteService,
        reset::{ResetService, SeedOutcome},
        student::{StudentService, TranscriptRow},
    },
};
use models::{
    course::NewCourse,
    department::NewDepartment,
    enrollment::{GradeUpdate, NewEnrollment},
    prerequisite::NewPrerequisite,
    student::NewStudent,
};
use sea_orm::DatabaseConnection;
use std::path::PathBuf;

/// One registry operation with its operator-supplied arguments.
///
/// `Show*` filters of `None` list every row.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Reset { script: PathBuf, seed: bool },
    ShowDepartments(Option<String>),
    AddDepartment(NewDepartment),
    ShowCourses(Option<String>),
    AddCourse(NewCourse),
    ShowStudents(Option<String>),
    AddStudent(NewStudent),
    ShowPrerequisites(Option<String>),
    AddPrerequisite(NewPrerequisite),
    ShowEnrollments(Option<String>),
    Enroll(NewEnrollment),
    UpdateGrade(GradeUpdate),
    ShowTranscript(String),
}

impl Request {
    /// Heading printed before an unfiltered listing
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::ShowDepartments(None) => Some("Showing all departments..."),
            Self::ShowCourses(None) => Some("Showing all courses..."),
            Self::ShowStudents(None) => Some("Showing all students..."),
            Self::ShowPrerequisites(None) => Some("Showing all course prerequisites..."),
            Self::ShowEnrollments(None) => Some("Showing all enrolled students..."),
            _ => None,
        }
    }

    /// The header-only table shown when a listing fails; `None` for writes
    pub fn empty_table(&self) -> Option<Table> {
        fn empty<R: TableRow>(numbered: bool) -> Option<Table> {
            Some(Table::from_rows::<R>(&[], numbered))
        }

        match self {
            Self::ShowDepartments(name) => empty::<departments::Model>(name.is_none()),
            Self::ShowCourses(dept_id) => empty::<courses::Model>(dept_id.is_none()),
            Self::ShowStudents(name) => empty::<students::Model>(name.is_none()),
            Self::ShowPrerequisites(course_id) => {
                empty::<prerequisites::Model>(course_id.is_none())
            }
            Self::ShowEnrollments(student_id) => empty::<enrolled::Model>(student_id.is_none()),
            Self::ShowTranscript(_) => empty::<TranscriptRow>(false),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Response {
    Rows(Table),
    /// Rows inserted or updated by a write
    Written(u64),
    Reset {
        statements: usize,
        /// Empty when seeding was not requested
        seeds: Vec<SeedOutcome>,
    },
}

/// Runs a request against the registry
pub async fn execute(db: &DatabaseConnection, request: Request) -> Result<Response, RegistryError> {
    let response = match request {
        Request::Reset { script, seed } => {
            let statements = ResetService::reset(db, &script).await?;
            let seeds = if seed {
                ResetService::populate(db).await
            } else {
                Vec::new()
            };
            Response::Reset { statements, seeds }
        }
        Request::ShowDepartments(name) => {
            let rows = DepartmentService::find(db, name.as_deref()).await?;
            Response::Rows(Table::from_rows(&rows, name.is_none()))
        }
        Request::AddDepartment(dept) => Response::Written(DepartmentService::add(db, &dept).await?),
        Request::ShowCourses(dept_id) => {
            let rows = CourseService::find(db, dept_id.as_deref()).await?;
            Response::Rows(Table::from_rows(&rows, dept_id.is_none()))
        }
        Request::AddCourse(course) => Response::Written(CourseService::add(db, &course).await?),
        Request::ShowStudents(name) => {
            let rows = StudentService::find(db, name.as_deref()).await?;
            Response::Rows(Table::from_rows(&rows, name.is_none()))
        }
        Request::AddStudent(student) => Response::Written(StudentService::add(db, &student).await?),
        Request::ShowPrerequisites(course_id) => {
            let rows = PrerequisiteService::find(db, course_id.as_deref()).await?;
            Response::Rows(Table::from_rows(&rows, course_id.is_none()))
        }
        Request::AddPrerequisite(prereq) => {
            Response::Written(PrerequisiteService::add(db, &prereq).await?)
        }
        Request::ShowEnrollments(student_id) => {
            let rows = EnrollmentService::find(db, student_id.as_deref()).await?;
            Response::Rows(Table::from_rows(&rows, student_id.is_none()))
        }
        Request::Enroll(enrollment) => {
            Response::Written(EnrollmentService::enroll(db, &enrollment).await?)
        }
        Request::UpdateGrade(update) => {
            Response::Written(EnrollmentService::update_grade(db, &update).await?)
        }
        Request::ShowTranscript(student_id) => {
            let rows = StudentService::transcript(db, &student_id).await?;
            Response::Rows(Table::from_rows(&rows, false))
        }
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, DbErr, MockDatabase, MockExecResult};

    fn computer_science() -> departments::Model {
        departments::Model {
            dept_id: "cs".to_string(),
            dept_name: "computer science".to_string(),
            dean_name: Some("rubio".to_string()),
            building: Some("ajax".to_string()),
            room: Some(100),
        }
    }

    #[tokio::test]
    async fn test_show_all_departments_is_numbered() {
        let db = MockDatabase::new(DbBackend::MySql)
            .append_query_results([vec![computer_science()]])
            .into_connection();

        let response = execute(&db, Request::ShowDepartments(None)).await.unwrap();
        let Response::Rows(table) = response else {
            panic!("expected rows");
        };

        assert_eq!(table.headers[0], "No");
        assert_eq!(
            table.rows,
            vec![vec!["1", "cs", "computer science", "rubio", "ajax", "100"]]
        );
    }

    #[tokio::test]
    async fn test_show_department_by_name_returns_exact_row() {
        let db = MockDatabase::new(DbBackend::MySql)
            .append_query_results([vec![computer_science()]])
            .into_connection();

        let request = Request::ShowDepartments(Some("computer science".to_string()));
        assert_eq!(request.banner(), None);

        let Response::Rows(table) = execute(&db, request).await.unwrap() else {
            panic!("expected rows");
        };

        assert_eq!(table.headers[0], "Department ID");
        assert_eq!(
            table.rows,
            vec![vec!["cs", "computer science", "rubio", "ajax", "100"]]
        );
    }

    #[tokio::test]
    async fn test_show_students_by_substring() {
        let db = MockDatabase::new(DbBackend::MySql)
            .append_query_results([vec![students::Model {
                student_id: "tb01".to_string(),
                first_name: "tom".to_string(),
                last_name: "bush".to_string(),
                gpa: Some(88.0),
            }]])
            .into_connection();

        let Response::Rows(table) = execute(&db, Request::ShowStudents(Some("tom".to_string())))
            .await
            .unwrap()
        else {
            panic!("expected rows");
        };

        assert_eq!(table.rows, vec![vec!["tb01", "tom", "bush", "88.00"]]);
    }

    #[tokio::test]
    async fn test_update_grade_without_match_is_success() {
        let db = MockDatabase::new(DbBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let update = GradeUpdate {
            student_id: "zz99".to_string(),
            course_id: "cs101".to_string(),
            year: 1999,
            grade: 70,
        };

        assert!(matches!(
            execute(&db, Request::UpdateGrade(update)).await,
            Ok(Response::Written(0))
        ));
    }

    #[tokio::test]
    async fn test_failed_write_is_an_error() {
        let db = MockDatabase::new(DbBackend::MySql)
            .append_exec_errors([DbErr::Custom("Cannot add or update a child row".to_string())])
            .into_connection();

        let request = Request::Enroll(NewEnrollment::new("tb01", "nope", 2024));
        assert!(execute(&db, request).await.is_err());
    }

    #[test]
    fn test_empty_table_for_listings() {
        let table = Request::ShowDepartments(None).empty_table().unwrap();
        assert_eq!(table.headers[0], "No");
        assert_eq!(table.headers[1], "Department ID");
        assert!(table.rows.is_empty());

        let table = Request::ShowTranscript("tb01".to_string())
            .empty_table()
            .unwrap();
        assert_eq!(table.headers.last().unwrap(), "Letter Grade");

        let table = Request::ShowEnrollments(Some("tb01".to_string()))
            .empty_table()
            .unwrap();
        assert_eq!(table.headers[0], "Student ID");
    }

    #[test]
    fn test_no_empty_table_for_writes() {
        let update = GradeUpdate {
            student_id: "tb01".to_string(),
            course_id: "cs101".to_string(),
            year: 2024,
            grade: 70,
        };

        assert!(Request::UpdateGrade(update).empty_table().is_none());
        assert!(
            Request::Reset {
                script: PathBuf::from("schema.sql"),
                seed: true,
            }
            .empty_table()
            .is_none()
        );
    }

    #[test]
    fn test_banners_only_for_unfiltered_listings() {
        assert!(Request::ShowCourses(None).banner().is_some());
        assert!(Request::ShowCourses(Some("cs".to_string())).banner().is_none());
        assert!(
            Request::ShowTranscript("tb01".to_string())
                .banner()
                .is_none()
        );
        assert!(
            Request::AddStudent(NewStudent::new("tb01", "tom", "bush"))
                .banner()
                .is_none()
        );
    }
}
