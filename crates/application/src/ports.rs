use iconfield_domain::{IconKind, Identifier};

use crate::ApplicationError;

#[derive(Debug, Clone)]
pub struct ScannedIcon {
    pub file_name: String,
    pub extension: String,
    pub kind: IconKind,
}

#[derive(Debug, Clone, Default)]
pub struct IconScanSummary {
    pub scanned_files: usize,
    pub icon_files: usize,
    pub icons: Vec<ScannedIcon>,
}

pub trait IconScanner {
    /// Lists icon files directly contained in `dir`. Subdirectories are not
    /// traversed and a missing directory is an empty summary, not an error.
    fn scan_icons(&self, dir: &str) -> Result<IconScanSummary, ApplicationError>;
}

#[derive(Debug, Clone)]
pub struct ClassBinding {
    pub table_name: Identifier,
    pub versioned: bool,
}

pub trait SchemaRegistry {
    fn resolve_class(&self, classname: &str) -> Option<ClassBinding>;
}

#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub id: i64,
    pub icon_path: Option<String>,
    pub published: bool,
}

pub trait RecordStore {
    fn table_exists(&self, table: &Identifier) -> Result<bool, ApplicationError>;

    fn fetch_records(
        &self,
        table: &Identifier,
        field: &Identifier,
        versioned: bool,
    ) -> Result<Vec<StoredRecord>, ApplicationError>;

    /// Rewrites one record's stored path across its primary, versions and
    /// live tables inside a single transaction. Returns the table names
    /// updated, in update order.
    fn update_icon_path(
        &self,
        table: &Identifier,
        field: &Identifier,
        record: &StoredRecord,
        new_path: &str,
        versioned: bool,
    ) -> Result<Vec<String>, ApplicationError>;
}
