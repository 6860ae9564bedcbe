mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    ClassBinding, IconScanSummary, IconScanner, RecordStore, ScannedIcon, SchemaRegistry,
    StoredRecord,
};
pub use service::ApplicationService;
pub use use_cases::{ListIconsCommand, MigratePathsCommand, RenderFieldCommand};
