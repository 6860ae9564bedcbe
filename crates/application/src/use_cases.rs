#[derive(Debug, Clone)]
pub struct ListIconsCommand {
    pub public_root: String,
    pub folder: String,
}

#[derive(Debug, Clone)]
pub struct RenderFieldCommand {
    pub field_name: String,
    pub current_value: Option<String>,
    pub public_root: String,
    pub folder: String,
}

#[derive(Debug, Clone)]
pub struct MigratePathsCommand {
    pub classname: String,
    pub field: String,
    pub new_folder: Option<String>,
}
