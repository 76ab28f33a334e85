use sea_orm::{DbErr, SqlErr};
use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures surfaced by the registry data-access layer
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {var} has invalid value {value:?}")]
    InvalidVar { var: &'static str, value: String },

    #[error("could not connect to MySQL: {0}")]
    Connection(#[source] DbErr),

    /// Duplicate key or missing foreign key
    #[error("integrity violation: {0}")]
    Integrity(String),

    #[error("{0}")]
    Database(#[source] DbErr),

    #[error("could not read schema script {}: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// Integrity classification relies on `DbErr::sql_err`, which only recognises
// errors raised by the sqlx MySQL driver. Mocked errors are never `Integrity`.
impl From<DbErr> for RegistryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Integrity(msg),
            _ => match err {
                DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Connection(err),
                _ => Self::Database(err),
            },
        }
    }
}
