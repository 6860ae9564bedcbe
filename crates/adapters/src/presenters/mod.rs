use iconfield_domain::{IconEntry, IconOption, MigratedRecord, MigrationReport};

pub fn present_icon_row(entry: &IconEntry) -> String {
    format!("{}\t{}", entry.value, entry.title)
}

pub fn present_migrated_record(record: &MigratedRecord) -> String {
    format!(
        "record {}: {} -> {} [{}]",
        record.record_id,
        record.origin_path,
        record.new_path,
        record.tables.join(", ")
    )
}

pub fn present_migration_summary(report: &MigrationReport) -> String {
    format!(
        "migration finished: updated={}, skipped={}",
        report.updated_count(),
        report.skipped_count()
    )
}

/// Renders the option list as a radio-group fragment for a host page to
/// embed. All attribute values and labels are escaped.
pub fn render_options_html(options: &[IconOption]) -> String {
    let mut html = String::from("<ul class=\"iconfield\">\n");
    for option in options {
        let id = escape_html(&option.id);
        let name = escape_html(&option.name);
        let value = escape_html(&option.value);
        let title = escape_html(&option.title);
        let checked = if option.is_checked { " checked" } else { "" };

        if option.value.is_empty() {
            html.push_str(&format!(
                "  <li class=\"iconfield__option iconfield__option--none\">\n    <input type=\"radio\" id=\"{id}\" name=\"{name}\" value=\"\"{checked} />\n    <label for=\"{id}\">{title}</label>\n  </li>\n"
            ));
        } else {
            html.push_str(&format!(
                "  <li class=\"iconfield__option\">\n    <input type=\"radio\" id=\"{id}\" name=\"{name}\" value=\"{value}\"{checked} />\n    <label for=\"{id}\"><img src=\"/{value}\" alt=\"{title}\" />{title}</label>\n  </li>\n"
            ));
        }
    }
    html.push_str("</ul>\n");
    html
}

/// JSON rendition of the option list, for hosts that template client-side.
pub fn render_options_json(options: &[IconOption]) -> String {
    serde_json::to_string_pretty(options).unwrap_or_else(|_| "[]".to_string())
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
