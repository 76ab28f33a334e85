use crate::{config::ConnectionConfig, error::RegistryError};
use log::{error, info};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Creates a database connection.
///
/// The pool is capped at one connection so every statement of a command
/// shares the same MySQL session.
pub async fn create_connection(
    config: &ConnectionConfig,
) -> Result<DatabaseConnection, RegistryError> {
    let mut options = ConnectOptions::new(config.url());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    match Database::connect(options).await {
        Ok(db) => {
            info!("Successfully connected to MySQL");
            Ok(db)
        }
        Err(err) => {
            error!(
                "Connection to {}:{}/{} failed: {err}",
                config.host, config.port, config.database
            );
            Err(RegistryError::Connection(err))
        }
    }
}
