use crate::{entities::students, error::RegistryError};
use log::{debug, info};
use models::student::NewStudent;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
    sea_query::{Alias, Expr, Func, SimpleExpr},
};

/// A student's standing together with the letter grade derived from their GPA
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct TranscriptRow {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gpa: Option<f64>,
    pub letter_grade: Option<String>,
}

pub struct StudentService;

impl StudentService {
    /// Builds the student listing, optionally restricted to students whose first
    /// or last name contains `name`, ignoring case
    pub fn select(name: Option<&str>) -> Select<students::Entity> {
        students::Entity::find()
            .apply_if(name, |query, name| {
                query.filter(Self::build_name_condition(name))
            })
            .order_by_asc(students::Column::StudentId)
    }

    fn build_name_condition(name: &str) -> Condition {
        let pattern = format!("%{}%", name.to_lowercase());
        let lower = |column: students::Column| {
            Expr::expr(Func::lower(Expr::col((students::Entity, column))))
        };

        Condition::any()
            .add(lower(students::Column::FirstName).like(pattern.clone()))
            .add(lower(students::Column::LastName).like(pattern))
    }

    pub async fn find(
        db: &DatabaseConnection,
        name: Option<&str>,
    ) -> Result<Vec<students::Model>, RegistryError> {
        let query = Self::select(name);
        debug!("Generated SQL: {}", query.build(DbBackend::MySql));

        Ok(query.all(db).await?)
    }

    pub async fn add(db: &DatabaseConnection, student: &NewStudent) -> Result<u64, RegistryError> {
        let inserted = students::Entity::insert(Self::student_to_active_model(student))
            .exec_without_returning(db)
            .await?;

        info!("Inserted student {}", student.student_id);
        Ok(inserted)
    }

    pub(crate) fn student_to_active_model(student: &NewStudent) -> students::ActiveModel {
        students::ActiveModel {
            student_id: Set(student.student_id.clone()),
            first_name: Set(student.first_name.clone()),
            last_name: Set(student.last_name.clone()),
            gpa: NotSet,
        }
    }

    /// Builds the transcript query; the letter grade comes from the
    /// `calculate_letter_grade` function defined by the schema script
    pub fn select_transcript(student_id: &str) -> Select<students::Entity> {
        let letter_grade: SimpleExpr = Func::cust(Alias::new("calculate_letter_grade"))
            .arg(Expr::col((students::Entity, students::Column::Gpa)))
            .into();

        students::Entity::find()
            .select_only()
            .columns([
                students::Column::StudentId,
                students::Column::FirstName,
                students::Column::LastName,
                students::Column::Gpa,
            ])
            .column_as(letter_grade, "letter_grade")
            .filter(students::Column::StudentId.eq(student_id))
    }

    pub async fn transcript(
        db: &DatabaseConnection,
        student_id: &str,
    ) -> Result<Vec<TranscriptRow>, RegistryError> {
        let query = Self::select_transcript(student_id);
        debug!("Generated SQL: {}", query.build(DbBackend::MySql));

        Ok(query.into_model::<TranscriptRow>().all(db).await?)
    }
}
