use crate::{entities::departments, error::RegistryError};
use log::{debug, info};
use models::department::NewDepartment;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter,
    QueryOrder, QueryTrait, Select,
};

pub struct DepartmentService;

impl DepartmentService {
    /// Builds the department listing, optionally restricted to an exact department name
    pub fn select(dept_name: Option<&str>) -> Select<departments::Entity> {
        departments::Entity::find()
            .apply_if(dept_name, |query, name| {
                query.filter(departments::Column::DeptName.eq(name))
            })
            .order_by_asc(departments::Column::DeptId)
    }

    /// Lists departments, all of them when `dept_name` is `None`
    pub async fn find(
        db: &DatabaseConnection,
        dept_name: Option<&str>,
    ) -> Result<Vec<departments::Model>, RegistryError> {
        let query = Self::select(dept_name);
        debug!("Generated SQL: {}", query.build(DbBackend::MySql));

        Ok(query.all(db).await?)
    }

    pub async fn add(db: &DatabaseConnection, dept: &NewDepartment) -> Result<u64, RegistryError> {
        let inserted = departments::Entity::insert(Self::department_to_active_model(dept))
            .exec_without_returning(db)
            .await?;

        info!("Inserted department {}", dept.dept_id);
        Ok(inserted)
    }

    pub(crate) fn department_to_active_model(dept: &NewDepartment) -> departments::ActiveModel {
        departments::ActiveModel {
            dept_id: Set(dept.dept_id.clone()),
            dept_name: Set(dept.dept_name.clone()),
            dean_name: Set(dept.dean_name.clone()),
            building: Set(dept.building.clone()),
            room: Set(dept.room),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, MockDatabase, MockExecResult};

    fn computer_science() -> departments::Model {
        departments::Model {
            dept_id: "cs".to_string(),
            dept_name: "computer science".to_string(),
            dean_name: Some("rubio".to_string()),
            building: Some("ajax".to_string()),
            room: Some(100),
        }
    }

    #[test]
    fn test_select_by_name() {
        let sql = DepartmentService::select(Some("computer science"))
            .build(DbBackend::MySql)
            .to_string();

        assert!(sql.starts_with("SELECT"));
        assert!(sql.contains("FROM `departments`"));
        assert!(sql.contains("WHERE `departments`.`dept_name` = 'computer science'"));
    }

    #[test]
    fn test_select_all_has_no_filter() {
        let sql = DepartmentService::select(None)
            .build(DbBackend::MySql)
            .to_string();

        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("ORDER BY `departments`.`dept_id` ASC"));
    }

    #[tokio::test]
    async fn test_add_then_find_by_name() {
        let db = MockDatabase::new(DbBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![computer_science()]])
            .into_connection();

        let dept = NewDepartment::new(
            "cs",
            "computer science",
            Some("rubio"),
            Some("ajax"),
            Some(100),
        );

        assert_eq!(DepartmentService::add(&db, &dept).await.unwrap(), 1);

        let found = DepartmentService::find(&db, Some("computer science"))
            .await
            .unwrap();
        assert_eq!(found, vec![computer_science()]);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        assert!(
            log[0]
                .statements()
                .iter()
                .any(|s| s.sql.starts_with("INSERT INTO `departments`"))
        );
    }

    #[tokio::test]
    async fn test_add_failure_is_surfaced_as_database_error() {
        let db = MockDatabase::new(DbBackend::MySql)
            .append_exec_errors([DbErr::Custom("Duplicate entry 'cs'".to_string())])
            .into_connection();

        let dept = NewDepartment::new("cs", "computer science", None, None, None);
        let err = DepartmentService::add(&db, &dept).await.unwrap_err();

        assert!(matches!(err, RegistryError::Database(_)));
        assert!(err.to_string().contains("Duplicate entry"));
    }
}
