use crate::{request::Response, table::Table};
use crossterm::style::Stylize;
use database::{config::ConnectionConfig, db::create_connection, error::RegistryError};
use log::warn;
use sea_orm::DatabaseConnection;
use std::io::{self, Write};

pub fn success(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Successful!".green().on_white())
}

pub fn failure(out: &mut impl Write, err: &RegistryError) -> io::Result<()> {
    warn!("{err:?}");
    writeln!(
        out,
        "Failed. You have an error message: {}",
        err.to_string().red().on_white()
    )
}

pub fn banner(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.green().on_white())
}

/// Opens the connection for one command, reporting a failure instead of returning it
pub async fn connect(
    out: &mut impl Write,
    config: &ConnectionConfig,
) -> io::Result<Option<DatabaseConnection>> {
    match create_connection(config).await {
        Ok(db) => Ok(Some(db)),
        Err(err) => {
            failure(out, &err)?;
            Ok(None)
        }
    }
}

/// Prints the result of a request.
///
/// A failed listing prints `empty` after the failure so the operator still
/// sees the columns with no rows.
pub fn outcome(
    out: &mut impl Write,
    result: Result<Response, RegistryError>,
    empty: Option<Table>,
) -> io::Result<()> {
    match result {
        Ok(Response::Rows(table)) => write!(out, "{}", table.render(true)),
        Ok(Response::Written(_)) => success(out),
        Ok(Response::Reset { statements, seeds }) => {
            writeln!(out, "Successfully reset database ({statements} statements)")?;
            for seed in seeds {
                write!(out, "Seeding {}: ", seed.table)?;
                match seed.result {
                    Ok(_) => success(out)?,
                    Err(err) => failure(out, &err)?,
                }
            }
            Ok(())
        }
        Err(err) => {
            failure(out, &err)?;
            match empty {
                Some(table) => write!(out, "{}", table.render(true)),
                None => Ok(()),
            }
        }
    }
}
