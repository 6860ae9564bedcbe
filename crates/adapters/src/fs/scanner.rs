use std::path::Path;

use iconfield_application::{ApplicationError, IconScanSummary, IconScanner, ScannedIcon};
use iconfield_domain::{detect_icon_kind, IconKind};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct WalkdirIconScanner;

impl IconScanner for WalkdirIconScanner {
    fn scan_icons(&self, dir: &str) -> Result<IconScanSummary, ApplicationError> {
        let dir_path = Path::new(dir);
        let mut summary = IconScanSummary::default();

        // A folder that does not exist simply offers no icons.
        if !dir_path.is_dir() {
            return Ok(summary);
        }

        for entry in WalkDir::new(dir_path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }

            summary.scanned_files += 1;
            let file_path = entry.path();
            let kind = detect_icon_kind(file_path);
            if kind == IconKind::Unsupported {
                continue;
            }

            let Some(file_name) = file_path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let extension = file_path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default()
                .to_ascii_lowercase();

            summary.icon_files += 1;
            summary.icons.push(ScannedIcon {
                file_name: file_name.to_string(),
                extension,
                kind,
            });
        }

        Ok(summary)
    }
}
