pub mod fs;
pub mod presenters;
pub mod registry;
pub mod sqlite;

pub use fs::WalkdirIconScanner;
pub use presenters::{
    present_icon_row, present_migrated_record, present_migration_summary, render_options_html,
    render_options_json,
};
pub use registry::MapSchemaRegistry;
pub use sqlite::SqliteRecordStore;
