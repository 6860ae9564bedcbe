mod config;
mod logging;

use std::collections::HashMap;
use std::process::ExitCode;

use config::AppConfig;
use iconfield_adapters::{
    present_icon_row, present_migrated_record, present_migration_summary, render_options_html,
    render_options_json, MapSchemaRegistry, SqliteRecordStore, WalkdirIconScanner,
};
use iconfield_application::{
    ApplicationService, ListIconsCommand, MigratePathsCommand, RenderFieldCommand,
};

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();

    let (config, rest) = match split_config(&args[1..]) {
        Ok(pair) => pair,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(1);
        }
    };

    let service = match build_application_service(&config) {
        Ok(service) => service,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(1);
        }
    };

    let command = parse_command(&rest);
    match run_command(command, &service, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(1)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig) -> Result<ApplicationService, String> {
    let mut registry = MapSchemaRegistry::new();
    for (classname, entry) in &config.classes {
        registry
            .bind(classname, &entry.table, entry.versioned)
            .map_err(|error| format!("invalid table for class {classname}: {error}"))?;
    }

    Ok(ApplicationService::new(
        Box::new(WalkdirIconScanner),
        Box::new(registry),
        Box::new(SqliteRecordStore::new(config.database_path.clone())),
    ))
}

#[derive(Debug, Clone)]
enum Command {
    Icons { pairs: HashMap<String, String> },
    Render { field: String, pairs: HashMap<String, String> },
    Migrate { pairs: HashMap<String, String> },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn split_config(args: &[String]) -> Result<(AppConfig, Vec<String>), String> {
    if args.first().map(String::as_str) == Some("--config") {
        let Some(path) = args.get(1) else {
            return Err("--config requires a file path".to_string());
        };
        return Ok((AppConfig::load(path)?, args[2..].to_vec()));
    }
    Ok((AppConfig::default(), args.to_vec()))
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    let Some(command) = args.first() else {
        return Err(CommandError::Usage("missing command".to_string()));
    };

    match command.as_str() {
        "icons" => Ok(Command::Icons {
            pairs: parse_pairs(&args[1..])?,
        }),
        "render" => {
            let Some(field) = args.get(1).filter(|arg| !arg.contains('=')) else {
                return Err(CommandError::Usage("missing field name".to_string()));
            };
            Ok(Command::Render {
                field: field.clone(),
                pairs: parse_pairs(&args[2..])?,
            })
        }
        "migrate" => {
            let pairs = parse_pairs(&args[1..])?;
            if !pairs.contains_key("classname") || !pairs.contains_key("field") {
                return Err(CommandError::Usage(
                    "pass both classname and field, eg classname=Demo\\Item field=Icon\n\
                     classname needs to include its namespacing\n\
                     if the new folder is not SiteIcons, pass new-path=<Folder>"
                        .to_string(),
                ));
            }
            Ok(Command::Migrate { pairs })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_pairs(args: &[String]) -> Result<HashMap<String, String>, CommandError> {
    let mut pairs = HashMap::new();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(CommandError::Usage(format!(
                "expected key=value, got: {arg}"
            )));
        };
        pairs.insert(key.to_string(), value.to_string());
    }
    Ok(pairs)
}

fn run_command(
    command: Result<Command, CommandError>,
    service: &ApplicationService,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Icons { pairs } => {
            let folder = pairs
                .get("folder")
                .cloned()
                .unwrap_or_else(|| config.icons_folder.clone());
            let public_root = pairs
                .get("public-root")
                .cloned()
                .unwrap_or_else(|| config.public_root.clone());

            let entries = service
                .list_icons(ListIconsCommand {
                    public_root,
                    folder: folder.clone(),
                })
                .map_err(|error| CommandError::Runtime(format!("listing icons failed: {error}")))?;

            if entries.is_empty() {
                println!("no icons found in {folder}");
                return Ok(());
            }
            for entry in entries {
                println!("{}", present_icon_row(&entry));
            }
            Ok(())
        }
        Command::Render { field, pairs } => {
            let folder = pairs
                .get("folder")
                .cloned()
                .unwrap_or_else(|| config.icons_folder.clone());
            let public_root = pairs
                .get("public-root")
                .cloned()
                .unwrap_or_else(|| config.public_root.clone());
            let format = pairs.get("format").map(String::as_str).unwrap_or("html");

            let options = service
                .render_field(RenderFieldCommand {
                    field_name: field,
                    current_value: pairs.get("value").cloned(),
                    public_root,
                    folder,
                })
                .map_err(|error| CommandError::Runtime(format!("render failed: {error}")))?;

            match format {
                "html" => print!("{}", render_options_html(&options)),
                "json" => println!("{}", render_options_json(&options)),
                other => {
                    return Err(CommandError::Usage(format!(
                        "unknown render format: {other}"
                    )))
                }
            }
            Ok(())
        }
        Command::Migrate { pairs } => {
            let classname = pairs.get("classname").cloned().unwrap_or_default();
            let field = pairs.get("field").cloned().unwrap_or_default();
            tracing::info!(
                "migrating {classname}.{field} in {}",
                config.database_path
            );

            let report = service
                .migrate_paths(MigratePathsCommand {
                    classname,
                    field,
                    new_folder: pairs.get("new-path").cloned(),
                })
                .map_err(|error| CommandError::Runtime(format!("migration failed: {error}")))?;

            for record in &report.migrated {
                println!("{}", present_migrated_record(record));
            }
            for record_id in &report.skipped_records {
                println!("record {record_id}: no icon, skipped");
            }
            println!("{}", present_migration_summary(&report));
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  iconfield [--config <path>] icons [folder=... public-root=...]");
    println!("  iconfield [--config <path>] render <field> [value=... folder=... public-root=... format=html|json]");
    println!("  iconfield [--config <path>] migrate classname=<Namespaced\\Class> field=<Column> [new-path=<Folder>]");
}
