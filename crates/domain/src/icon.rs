use std::path::Path;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Bitmap,
    Vector,
    Unsupported,
}

pub fn detect_icon_kind(path: &Path) -> IconKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return IconKind::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "bmp" => IconKind::Bitmap,
        "svg" => IconKind::Vector,
        _ => IconKind::Unsupported,
    }
}

/// One selectable icon: a public-relative path and the bare file name shown
/// as its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    pub value: String,
    pub title: String,
}

pub fn icon_entry(folder: &str, file_name: &str) -> IconEntry {
    IconEntry {
        value: join_public_path(folder, file_name),
        title: file_name.to_string(),
    }
}

pub fn join_public_path(folder: &str, file_name: &str) -> String {
    let trimmed = folder.trim_matches('/');
    if trimmed.is_empty() {
        file_name.to_string()
    } else {
        format!("{trimmed}/{file_name}")
    }
}
