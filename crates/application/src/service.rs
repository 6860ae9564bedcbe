use std::path::Path;

use iconfield_domain::{
    build_icon_options, icon_entry, migrated_icon_path, IconEntry, IconOption, Identifier,
    MigratedRecord, MigrationReport, DEFAULT_MIGRATION_FOLDER,
};

use crate::{
    ApplicationError, IconScanner, ListIconsCommand, MigratePathsCommand, RecordStore,
    RenderFieldCommand, SchemaRegistry,
};

pub struct ApplicationService {
    scanner: Box<dyn IconScanner>,
    registry: Box<dyn SchemaRegistry>,
    store: Box<dyn RecordStore>,
}

impl ApplicationService {
    pub fn new(
        scanner: Box<dyn IconScanner>,
        registry: Box<dyn SchemaRegistry>,
        store: Box<dyn RecordStore>,
    ) -> Self {
        Self {
            scanner,
            registry,
            store,
        }
    }

    pub fn list_icons(
        &self,
        command: ListIconsCommand,
    ) -> Result<Vec<IconEntry>, ApplicationError> {
        if command.public_root.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "public root must not be empty".to_string(),
            ));
        }
        if command.folder.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "icon folder must not be empty".to_string(),
            ));
        }

        let dir = Path::new(&command.public_root)
            .join(command.folder.trim_matches('/'))
            .to_string_lossy()
            .to_string();
        let summary = self.scanner.scan_icons(&dir)?;

        let mut entries: Vec<IconEntry> = summary
            .icons
            .iter()
            .map(|icon| icon_entry(&command.folder, &icon.file_name))
            .collect();
        // Directory enumeration order is filesystem-dependent; sort so the
        // rendered option order is stable.
        entries.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(entries)
    }

    pub fn render_field(
        &self,
        command: RenderFieldCommand,
    ) -> Result<Vec<IconOption>, ApplicationError> {
        let field = Identifier::new(&command.field_name)?;
        let entries = self.list_icons(ListIconsCommand {
            public_root: command.public_root,
            folder: command.folder,
        })?;
        Ok(build_icon_options(
            &field,
            command.current_value.as_deref(),
            &entries,
        ))
    }

    pub fn migrate_paths(
        &self,
        command: MigratePathsCommand,
    ) -> Result<MigrationReport, ApplicationError> {
        if command.classname.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "classname must not be empty".to_string(),
            ));
        }
        let field = Identifier::new(&command.field)?;

        let binding = self
            .registry
            .resolve_class(&command.classname)
            .ok_or_else(|| {
                ApplicationError::NotFound(format!(
                    "class {} is not registered",
                    command.classname
                ))
            })?;

        if !self.store.table_exists(&binding.table_name)? {
            return Err(ApplicationError::NotFound(format!(
                "table {} for class {} does not exist",
                binding.table_name, command.classname
            )));
        }

        let new_folder = command
            .new_folder
            .filter(|folder| !folder.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MIGRATION_FOLDER.to_string());

        let records =
            self.store
                .fetch_records(&binding.table_name, &field, binding.versioned)?;

        let mut report = MigrationReport::default();
        for record in records {
            let Some(origin) = record.icon_path.clone().filter(|path| !path.is_empty()) else {
                report.skipped_records.push(record.id);
                continue;
            };

            let new_path = migrated_icon_path(&origin, &new_folder);
            let tables = self.store.update_icon_path(
                &binding.table_name,
                &field,
                &record,
                &new_path,
                binding.versioned,
            )?;

            report.migrated.push(MigratedRecord {
                record_id: record.id,
                origin_path: origin,
                new_path,
                tables,
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use iconfield_domain::IconKind;

    use super::*;
    use crate::{ClassBinding, IconScanSummary, ScannedIcon, StoredRecord};

    struct FakeScanner {
        file_names: Vec<&'static str>,
        seen_dirs: Rc<RefCell<Vec<String>>>,
    }

    impl FakeScanner {
        fn new(file_names: Vec<&'static str>) -> Self {
            Self {
                file_names,
                seen_dirs: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl IconScanner for FakeScanner {
        fn scan_icons(&self, dir: &str) -> Result<IconScanSummary, ApplicationError> {
            self.seen_dirs.borrow_mut().push(dir.to_string());
            let icons: Vec<ScannedIcon> = self
                .file_names
                .iter()
                .map(|name| ScannedIcon {
                    file_name: (*name).to_string(),
                    extension: name.rsplit('.').next().unwrap_or_default().to_string(),
                    kind: IconKind::Bitmap,
                })
                .collect();
            Ok(IconScanSummary {
                scanned_files: icons.len(),
                icon_files: icons.len(),
                icons,
            })
        }
    }

    struct FakeRegistry {
        classes: HashMap<String, ClassBinding>,
    }

    impl SchemaRegistry for FakeRegistry {
        fn resolve_class(&self, classname: &str) -> Option<ClassBinding> {
            self.classes.get(classname).cloned()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct RecordedUpdate {
        record_id: i64,
        new_path: String,
    }

    struct FakeStore {
        table_exists: bool,
        records: Vec<StoredRecord>,
        updates: RefCell<Vec<RecordedUpdate>>,
    }

    impl FakeStore {
        fn new(records: Vec<StoredRecord>) -> Self {
            Self {
                table_exists: true,
                records,
                updates: RefCell::new(Vec::new()),
            }
        }
    }

    impl RecordStore for FakeStore {
        fn table_exists(&self, _table: &Identifier) -> Result<bool, ApplicationError> {
            Ok(self.table_exists)
        }

        fn fetch_records(
            &self,
            _table: &Identifier,
            _field: &Identifier,
            _versioned: bool,
        ) -> Result<Vec<StoredRecord>, ApplicationError> {
            Ok(self.records.clone())
        }

        fn update_icon_path(
            &self,
            table: &Identifier,
            _field: &Identifier,
            record: &StoredRecord,
            new_path: &str,
            versioned: bool,
        ) -> Result<Vec<String>, ApplicationError> {
            self.updates.borrow_mut().push(RecordedUpdate {
                record_id: record.id,
                new_path: new_path.to_string(),
            });
            let mut tables = vec![table.as_str().to_string()];
            if versioned {
                tables.push(format!("{table}_Versions"));
                if record.published {
                    tables.push(format!("{table}_Live"));
                }
            }
            Ok(tables)
        }
    }

    fn service_with(
        scanner: FakeScanner,
        registry: FakeRegistry,
        store: FakeStore,
    ) -> ApplicationService {
        ApplicationService::new(Box::new(scanner), Box::new(registry), Box::new(store))
    }

    fn empty_registry() -> FakeRegistry {
        FakeRegistry {
            classes: HashMap::new(),
        }
    }

    fn registry_with(classname: &str, table: &str, versioned: bool) -> FakeRegistry {
        let mut classes = HashMap::new();
        classes.insert(
            classname.to_string(),
            ClassBinding {
                table_name: Identifier::new(table).expect("valid table"),
                versioned,
            },
        );
        FakeRegistry { classes }
    }

    #[test]
    fn list_icons_sorts_by_title_and_joins_folder() {
        let service = service_with(
            FakeScanner::new(vec!["zebra.png", "apple.svg"]),
            empty_registry(),
            FakeStore::new(Vec::new()),
        );

        let entries = service
            .list_icons(ListIconsCommand {
                public_root: "public".to_string(),
                folder: "assets/SiteIcons".to_string(),
            })
            .expect("list icons");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "apple.svg");
        assert_eq!(entries[0].value, "assets/SiteIcons/apple.svg");
        assert_eq!(entries[1].value, "assets/SiteIcons/zebra.png");
    }

    #[test]
    fn list_icons_rejects_blank_folder() {
        let service = service_with(
            FakeScanner::new(Vec::new()),
            empty_registry(),
            FakeStore::new(Vec::new()),
        );

        let result = service.list_icons(ListIconsCommand {
            public_root: "public".to_string(),
            folder: "   ".to_string(),
        });
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }

    #[test]
    fn list_icons_resolves_dir_under_public_root() {
        let scanner = FakeScanner::new(Vec::new());
        let seen_dirs = scanner.seen_dirs.clone();
        let service = service_with(scanner, empty_registry(), FakeStore::new(Vec::new()));

        service
            .list_icons(ListIconsCommand {
                public_root: "public".to_string(),
                folder: "/assets/SiteIcons/".to_string(),
            })
            .expect("list icons");

        let expected = Path::new("public")
            .join("assets/SiteIcons")
            .to_string_lossy()
            .to_string();
        assert_eq!(seen_dirs.borrow().as_slice(), [expected]);
    }

    #[test]
    fn render_field_prefixes_none_option() {
        let service = service_with(
            FakeScanner::new(vec!["a.png", "b.png"]),
            empty_registry(),
            FakeStore::new(Vec::new()),
        );

        let options = service
            .render_field(RenderFieldCommand {
                field_name: "Icon".to_string(),
                current_value: None,
                public_root: "public".to_string(),
                folder: "assets/SiteIcons".to_string(),
            })
            .expect("render");

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, "");
        assert!(options[0].is_checked);
        let none_options = options.iter().filter(|option| option.value.is_empty()).count();
        assert_eq!(none_options, 1);
    }

    #[test]
    fn render_field_checks_current_value() {
        let service = service_with(
            FakeScanner::new(vec!["a.png", "b.png"]),
            empty_registry(),
            FakeStore::new(Vec::new()),
        );

        let options = service
            .render_field(RenderFieldCommand {
                field_name: "Icon".to_string(),
                current_value: Some("assets/SiteIcons/b.png".to_string()),
                public_root: "public".to_string(),
                folder: "assets/SiteIcons".to_string(),
            })
            .expect("render");

        assert!(!options[0].is_checked);
        assert!(options
            .iter()
            .any(|option| option.is_checked && option.value == "assets/SiteIcons/b.png"));
    }

    #[test]
    fn render_field_rejects_unsafe_field_name() {
        let service = service_with(
            FakeScanner::new(Vec::new()),
            empty_registry(),
            FakeStore::new(Vec::new()),
        );

        let result = service.render_field(RenderFieldCommand {
            field_name: "Icon;--".to_string(),
            current_value: None,
            public_root: "public".to_string(),
            folder: "assets/SiteIcons".to_string(),
        });
        assert!(matches!(result, Err(ApplicationError::Domain(_))));
    }

    #[test]
    fn migrate_rejects_unknown_class() {
        let service = service_with(
            FakeScanner::new(Vec::new()),
            empty_registry(),
            FakeStore::new(Vec::new()),
        );

        let result = service.migrate_paths(MigratePathsCommand {
            classname: "Demo\\Item".to_string(),
            field: "Icon".to_string(),
            new_folder: None,
        });
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn migrate_rejects_missing_table() {
        let mut store = FakeStore::new(Vec::new());
        store.table_exists = false;
        let service = service_with(
            FakeScanner::new(Vec::new()),
            registry_with("Demo\\Item", "Item", false),
            store,
        );

        let result = service.migrate_paths(MigratePathsCommand {
            classname: "Demo\\Item".to_string(),
            field: "Icon".to_string(),
            new_folder: None,
        });
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn migrate_rewrites_paths_and_skips_empty() {
        let records = vec![
            StoredRecord {
                id: 1,
                icon_path: Some("old/foo.png".to_string()),
                published: false,
            },
            StoredRecord {
                id: 2,
                icon_path: None,
                published: false,
            },
            StoredRecord {
                id: 3,
                icon_path: Some("".to_string()),
                published: false,
            },
        ];
        let service = service_with(
            FakeScanner::new(Vec::new()),
            registry_with("Demo\\Item", "Item", false),
            FakeStore::new(records),
        );

        let report = service
            .migrate_paths(MigratePathsCommand {
                classname: "Demo\\Item".to_string(),
                field: "Icon".to_string(),
                new_folder: Some("Bar".to_string()),
            })
            .expect("migrate");

        assert_eq!(report.updated_count(), 1);
        assert_eq!(report.migrated[0].record_id, 1);
        assert_eq!(report.migrated[0].new_path, "assets/Bar/foo.png");
        assert_eq!(report.skipped_records, vec![2, 3]);
    }

    #[test]
    fn migrate_defaults_to_site_icons_folder() {
        let records = vec![StoredRecord {
            id: 7,
            icon_path: Some("assets/old/star.svg".to_string()),
            published: true,
        }];
        let service = service_with(
            FakeScanner::new(Vec::new()),
            registry_with("Demo\\Item", "Item", true),
            FakeStore::new(records),
        );

        let report = service
            .migrate_paths(MigratePathsCommand {
                classname: "Demo\\Item".to_string(),
                field: "Icon".to_string(),
                new_folder: None,
            })
            .expect("migrate");

        assert_eq!(report.migrated[0].new_path, "assets/SiteIcons/star.svg");
        assert_eq!(
            report.migrated[0].tables,
            vec!["Item", "Item_Versions", "Item_Live"]
        );
    }

    #[test]
    fn migrate_rejects_blank_classname() {
        let service = service_with(
            FakeScanner::new(Vec::new()),
            empty_registry(),
            FakeStore::new(Vec::new()),
        );

        let result = service.migrate_paths(MigratePathsCommand {
            classname: "  ".to_string(),
            field: "Icon".to_string(),
            new_folder: None,
        });
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }
}
