use crate::{entities::prerequisites, error::RegistryError};
use log::{debug, info};
use models::prerequisite::NewPrerequisite;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter,
    QueryOrder, QueryTrait, Select,
};

pub struct PrerequisiteService;

impl PrerequisiteService {
    /// Builds the prerequisite listing, optionally restricted to the course that requires them
    pub fn select(course_id: Option<&str>) -> Select<prerequisites::Entity> {
        prerequisites::Entity::find()
            .apply_if(course_id, |query, course_id| {
                query.filter(prerequisites::Column::CourseId.eq(course_id))
            })
            .order_by_asc(prerequisites::Column::CourseId)
            .order_by_asc(prerequisites::Column::CoursePrereqId)
    }

    pub async fn find(
        db: &DatabaseConnection,
        course_id: Option<&str>,
    ) -> Result<Vec<prerequisites::Model>, RegistryError> {
        let query = Self::select(course_id);
        debug!("Generated SQL: {}", query.build(DbBackend::MySql));

        Ok(query.all(db).await?)
    }

    /// Records a prerequisite. Existing enrollments are not checked against it.
    pub async fn add(
        db: &DatabaseConnection,
        prereq: &NewPrerequisite,
    ) -> Result<u64, RegistryError> {
        let inserted = prerequisites::Entity::insert(Self::prerequisite_to_active_model(prereq))
            .exec_without_returning(db)
            .await?;

        info!(
            "Inserted prerequisite {} -> {}",
            prereq.course_id, prereq.course_prereq_id
        );
        Ok(inserted)
    }

    pub(crate) fn prerequisite_to_active_model(
        prereq: &NewPrerequisite,
    ) -> prerequisites::ActiveModel {
        prerequisites::ActiveModel {
            course_id: Set(prereq.course_id.clone()),
            course_prereq_id: Set(prereq.course_prereq_id.clone()),
            min_grade: Set(prereq.min_grade),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{MockDatabase, MockExecResult, Value};

    #[test]
    fn test_select_by_course() {
        let sql = PrerequisiteService::select(Some("cs202"))
            .build(DbBackend::MySql)
            .to_string();

        assert!(sql.contains("FROM `prerequisites`"));
        assert!(sql.contains("WHERE `prerequisites`.`course_id` = 'cs202'"));
    }

    #[tokio::test]
    async fn test_add_prerequisite_binds_min_grade() {
        let db = MockDatabase::new(DbBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let prereq = NewPrerequisite::new("cs202", "cs201", 75);
        assert_eq!(PrerequisiteService::add(&db, &prereq).await.unwrap(), 1);

        let log = db.into_transaction_log();
        let statement = &log[0].statements()[0];
        assert!(statement.sql.starts_with("INSERT INTO `prerequisites`"));

        let values = statement.values.as_ref().unwrap();
        assert_eq!(values.0.len(), 3);
        assert_eq!(values.0[2], Value::Int(Some(75)));
    }
}
