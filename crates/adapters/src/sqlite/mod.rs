mod queries;

use std::path::PathBuf;

use iconfield_application::{ApplicationError, RecordStore, StoredRecord};
use iconfield_domain::Identifier;
use rusqlite::Connection;

/// Record store backed by a SQLite database file. Table and column names are
/// interpolated into statements, which is why they only arrive here as
/// validated [`Identifier`]s.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    path: PathBuf,
}

impl SqliteRecordStore {
    pub fn new(path: String) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl RecordStore for SqliteRecordStore {
    fn table_exists(&self, table: &Identifier) -> Result<bool, ApplicationError> {
        let conn = self.open_connection()?;
        queries::table_exists(&conn, table.as_str())
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn fetch_records(
        &self,
        table: &Identifier,
        field: &Identifier,
        versioned: bool,
    ) -> Result<Vec<StoredRecord>, ApplicationError> {
        let conn = self.open_connection()?;
        queries::fetch_records(&conn, table.as_str(), field.as_str(), versioned)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn update_icon_path(
        &self,
        table: &Identifier,
        field: &Identifier,
        record: &StoredRecord,
        new_path: &str,
        versioned: bool,
    ) -> Result<Vec<String>, ApplicationError> {
        let mut conn = self.open_connection()?;
        queries::update_icon_path(
            &mut conn,
            table.as_str(),
            field.as_str(),
            record,
            new_path,
            versioned,
        )
        .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}
