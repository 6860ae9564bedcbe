use serde::Serialize;

use crate::{IconEntry, Identifier};

/// One radio option as handed to a presenter. The first option of every
/// rendered field is the synthetic clear option with an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconOption {
    pub id: String,
    pub name: String,
    pub value: String,
    pub title: String,
    pub is_checked: bool,
}

/// Builds the ordered option list for a field. Option ids are index-based so
/// two icons whose names differ only in punctuation cannot collide.
pub fn build_icon_options(
    field: &Identifier,
    current_value: Option<&str>,
    entries: &[IconEntry],
) -> Vec<IconOption> {
    let current = current_value.unwrap_or("");
    let mut options = Vec::with_capacity(entries.len() + 1);

    options.push(IconOption {
        id: format!("{field}_none"),
        name: field.as_str().to_string(),
        value: String::new(),
        title: String::new(),
        is_checked: current.is_empty(),
    });

    for (index, entry) in entries.iter().enumerate() {
        options.push(IconOption {
            id: format!("{field}_{index}"),
            name: field.as_str().to_string(),
            value: entry.value.clone(),
            title: entry.title.clone(),
            is_checked: entry.value == current,
        });
    }

    options
}
