mod error;
mod icon;
mod identifier;
mod migration;
mod options;

pub use error::DomainError;
pub use icon::{detect_icon_kind, icon_entry, join_public_path, IconEntry, IconKind};
pub use identifier::Identifier;
pub use migration::{
    migrated_icon_path, path_basename, MigratedRecord, MigrationReport, ASSETS_PREFIX,
    DEFAULT_MIGRATION_FOLDER,
};
pub use options::{build_icon_options, IconOption};
