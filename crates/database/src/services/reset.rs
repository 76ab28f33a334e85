use crate::{
    entities::{courses, departments, prerequisites, students},
    error::RegistryError,
    script::split_statements,
    services::{
        course::CourseService, department::DepartmentService,
        prerequisite::PrerequisiteService, student::StudentService,
    },
};
use log::{error, info};
use models::seed;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait};
use std::{fs, path::Path};

/// Result of inserting one table's worth of seed rows
#[derive(Debug)]
pub struct SeedOutcome {
    pub table: &'static str,
    pub result: Result<u64, RegistryError>,
}

pub struct ResetService;

impl ResetService {
    /// Drops and recreates the registry schema from the script at `path`.
    ///
    /// Statements run one by one; the first failure stops the reset and
    /// earlier statements stay applied.
    pub async fn reset(db: &DatabaseConnection, path: &Path) -> Result<usize, RegistryError> {
        let script = fs::read_to_string(path).map_err(|source| RegistryError::Script {
            path: path.to_path_buf(),
            source,
        })?;

        Self::run_script(db, &script).await
    }

    /// Executes every statement of `script`, returning how many ran
    pub async fn run_script(db: &DatabaseConnection, script: &str) -> Result<usize, RegistryError> {
        let statements = split_statements(script);

        for statement in &statements {
            db.execute_unprepared(statement).await?;
            info!("Executed: {statement}");
        }

        Ok(statements.len())
    }

    /// Inserts the fixed seed rows, one bulk insert per table.
    ///
    /// Every table is attempted even when an earlier one fails, and nothing
    /// is rolled back. Seeding an already seeded registry fails on every
    /// table with duplicate keys.
    pub async fn populate(db: &DatabaseConnection) -> Vec<SeedOutcome> {
        let departments = seed::departments()
            .iter()
            .map(DepartmentService::department_to_active_model)
            .collect::<Vec<_>>();
        let courses = seed::courses()
            .iter()
            .map(CourseService::course_to_active_model)
            .collect::<Vec<_>>();
        let prerequisites = seed::prerequisites()
            .iter()
            .map(PrerequisiteService::prerequisite_to_active_model)
            .collect::<Vec<_>>();
        let students = seed::students()
            .iter()
            .map(StudentService::student_to_active_model)
            .collect::<Vec<_>>();

        let outcomes = vec![
            Self::record(
                "departments",
                departments::Entity::insert_many(departments)
                    .exec_without_returning(db)
                    .await,
            ),
            Self::record(
                "courses",
                courses::Entity::insert_many(courses)
                    .exec_without_returning(db)
                    .await,
            ),
            Self::record(
                "prerequisites",
                prerequisites::Entity::insert_many(prerequisites)
                    .exec_without_returning(db)
                    .await,
            ),
            Self::record(
                "students",
                students::Entity::insert_many(students)
                    .exec_without_returning(db)
                    .await,
            ),
        ];

        if outcomes.iter().all(|outcome| outcome.result.is_ok()) {
            info!("Database is successfully initialized.");
        }

        outcomes
    }

    fn record(table: &'static str, result: Result<u64, sea_orm::DbErr>) -> SeedOutcome {
        match &result {
            Ok(rows) => info!("Seeded {rows} row(s) into {table}"),
            Err(err) => error!("Seeding {table} failed: {err}"),
        }

        SeedOutcome {
            table,
            result: result.map_err(RegistryError::from),
        }
    }
}
