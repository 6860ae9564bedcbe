use std::collections::HashMap;
use std::fs;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: String,
    pub public_root: String,
    pub icons_folder: String,
    pub classes: HashMap<String, ClassEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassEntry {
    pub table: String,
    #[serde(default)]
    pub versioned: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: "site.sqlite3".to_string(),
            public_root: "public".to_string(),
            icons_folder: "assets/SiteIcons".to_string(),
            classes: HashMap::new(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|error| format!("cannot read config {path}: {error}"))?;
        serde_json::from_str(&raw)
            .map_err(|error| format!("cannot parse config {path}: {error}"))
    }
}
