//! Filtered read of the `Timetable` table.
//!
//! One operation: `fetch_timetable`, which opens a fresh connection, runs a
//! single parameterized SELECT for the requested level and returns the rows
//! as `TimetableEntry` values. The level is always bound as a statement
//! parameter, never spliced into the SQL text. The connection is a local
//! value of the function, so it is released on every exit path, the error
//! ones included.
//!
use std::fmt;

use tokio_postgres::{Client, NoTls};

use crate::config::DbConfig;
use crate::entry::TimetableEntry;

/// The only statement this crate issues. `course_id` and `time` are cast to
/// text so integer ids and TIME columns read into the same record shape.
/// Result order is fixed to (day, time, course_id).
const FETCH_QUERY: &str = "SELECT course_id::text, course_name, day, time::text, room \
     FROM Timetable WHERE level = $1 ORDER BY day, time, course_id";

/// Failure of a timetable fetch, split by phase so callers can tell an
/// unreachable database from a rejected statement.
#[derive(Debug)]
pub enum FetchError {
    /// Could not open a connection to the database
    Connect(tokio_postgres::Error),
    /// The statement failed or a row did not decode
    Query(tokio_postgres::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Connect(e) => write!(f, "database connection failed: {e}"),
            FetchError::Query(e) => write!(f, "timetable query failed: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Connect(e) | FetchError::Query(e) => Some(e),
        }
    }
}

/// Open a fresh connection to the timetable database and hand the
/// connection driver to the runtime.
async fn connect(config: &DbConfig) -> Result<Client, tokio_postgres::Error> {
    let (client, connection) = tokio_postgres::Config::new()
        .host(&config.host)
        .port(config.port)
        .dbname(&config.dbname)
        .user(&config.user)
        .password(&config.password)
        .connect(NoTls)
        .await?;
    // The driver task ends on its own once the client is dropped.
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("connection error: {e}");
        }
    });
    Ok(client)
}

/// Fetch every timetable entry stored for `level`.
///
/// Opens a connection, runs the one parameterized SELECT, and returns the
/// matching rows ordered by (day, time, course_id). An empty result is not
/// an error. The connection lives only for the duration of this call.
///
/// # Arguments
/// * `config` - Connection settings for the timetable database
/// * `level` - Filter value, matched literally against the `level` column
pub async fn fetch_timetable(
    config: &DbConfig,
    level: &str,
) -> Result<Vec<TimetableEntry>, FetchError> {
    let client = connect(config).await.map_err(FetchError::Connect)?;

    let rows = client
        .query(FETCH_QUERY, &[&level])
        .await
        .map_err(FetchError::Query)?;

    let mut entries = Vec::with_capacity(rows.len());
    for row in &rows {
        entries.push(TimetableEntry {
            course_id: row.try_get(0).map_err(FetchError::Query)?,
            course_name: row.try_get(1).map_err(FetchError::Query)?,
            day: row.try_get(2).map_err(FetchError::Query)?,
            time: row.try_get(3).map_err(FetchError::Query)?,
            room: row.try_get(4).map_err(FetchError::Query)?,
        });
    }
    Ok(entries)
}
