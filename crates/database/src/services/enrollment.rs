use crate::{entities::enrolled, error::RegistryError};
use log::{debug, info};
use models::enrollment::{GradeUpdate, NewEnrollment};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter, QueryOrder, QueryTrait,
    Select, UpdateMany,
    sea_query::Expr,
};

pub struct EnrollmentService;

impl EnrollmentService {
    /// Builds the enrollment listing, optionally restricted to one student
    pub fn select(student_id: Option<&str>) -> Select<enrolled::Entity> {
        enrolled::Entity::find()
            .apply_if(student_id, |query, student_id| {
                query.filter(enrolled::Column::StudentId.eq(student_id))
            })
            .order_by_asc(enrolled::Column::StudentId)
            .order_by_asc(enrolled::Column::EnrollmentYear)
            .order_by_asc(enrolled::Column::CourseId)
    }

    pub async fn find(
        db: &DatabaseConnection,
        student_id: Option<&str>,
    ) -> Result<Vec<enrolled::Model>, RegistryError> {
        let query = Self::select(student_id);
        debug!("Generated SQL: {}", query.build(DbBackend::MySql));

        Ok(query.all(db).await?)
    }

    /// Enrolls a student without a grade. Prerequisites are not consulted.
    pub async fn enroll(
        db: &DatabaseConnection,
        enrollment: &NewEnrollment,
    ) -> Result<u64, RegistryError> {
        let model = enrolled::ActiveModel {
            student_id: Set(enrollment.student_id.clone()),
            course_id: Set(enrollment.course_id.clone()),
            enrollment_year: Set(enrollment.year),
            grade: NotSet,
        };

        let inserted = enrolled::Entity::insert(model)
            .exec_without_returning(db)
            .await?;

        info!(
            "Enrolled {} in {} for {}",
            enrollment.student_id, enrollment.course_id, enrollment.year
        );
        Ok(inserted)
    }

    pub fn build_grade_update(update: &GradeUpdate) -> UpdateMany<enrolled::Entity> {
        enrolled::Entity::update_many()
            .col_expr(enrolled::Column::Grade, Expr::value(update.grade))
            .filter(enrolled::Column::StudentId.eq(update.student_id.as_str()))
            .filter(enrolled::Column::CourseId.eq(update.course_id.as_str()))
            .filter(enrolled::Column::EnrollmentYear.eq(update.year))
    }

    /// Sets the grade of one enrollment and returns the number of rows changed.
    ///
    /// Targeting an enrollment that does not exist changes nothing and is not an error.
    pub async fn update_grade(
        db: &DatabaseConnection,
        update: &GradeUpdate,
    ) -> Result<u64, RegistryError> {
        let result = Self::build_grade_update(update).exec(db).await?;

        info!(
            "Grade update for {} in {} ({}) affected {} row(s)",
            update.student_id, update.course_id, update.year, result.rows_affected
        );
        Ok(result.rows_affected)
    }
}
