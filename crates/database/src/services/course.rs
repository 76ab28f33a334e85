use crate::{entities::courses, error::RegistryError};
use log::{debug, info};
use models::course::NewCourse;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter,
    QueryOrder, QueryTrait, Select,
};

pub struct CourseService;

impl CourseService {
    /// Builds the course listing, optionally restricted to one department
    pub fn select(dept_id: Option<&str>) -> Select<courses::Entity> {
        courses::Entity::find()
            .apply_if(dept_id, |query, dept_id| {
                query.filter(courses::Column::DeptId.eq(dept_id))
            })
            .order_by_asc(courses::Column::DeptId)
            .order_by_asc(courses::Column::CourseId)
    }

    pub async fn find(
        db: &DatabaseConnection,
        dept_id: Option<&str>,
    ) -> Result<Vec<courses::Model>, RegistryError> {
        let query = Self::select(dept_id);
        debug!("Generated SQL: {}", query.build(DbBackend::MySql));

        Ok(query.all(db).await?)
    }

    pub async fn add(db: &DatabaseConnection, course: &NewCourse) -> Result<u64, RegistryError> {
        let inserted = courses::Entity::insert(Self::course_to_active_model(course))
            .exec_without_returning(db)
            .await?;

        info!("Inserted course {} in {}", course.course_id, course.dept_id);
        Ok(inserted)
    }

    pub(crate) fn course_to_active_model(course: &NewCourse) -> courses::ActiveModel {
        courses::ActiveModel {
            dept_id: Set(course.dept_id.clone()),
            course_id: Set(course.course_id.clone()),
            course_name: Set(course.course_name.clone()),
            hour: Set(course.hour),
        }
    }
}
