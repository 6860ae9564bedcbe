/// Icon paths live under the public assets tree.
pub const ASSETS_PREFIX: &str = "assets";

pub const DEFAULT_MIGRATION_FOLDER: &str = "SiteIcons";

pub fn path_basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Rewrites a stored icon path to point at a new assets folder, keeping the
/// file name.
pub fn migrated_icon_path(origin: &str, new_folder: &str) -> String {
    format!(
        "{ASSETS_PREFIX}/{}/{}",
        new_folder.trim_matches('/'),
        path_basename(origin)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedRecord {
    pub record_id: i64,
    pub origin_path: String,
    pub new_path: String,
    /// Table names the rewrite touched, in update order.
    pub tables: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: Vec<MigratedRecord>,
    pub skipped_records: Vec<i64>,
}

impl MigrationReport {
    pub fn updated_count(&self) -> usize {
        self.migrated.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_records.len()
    }
}
