use std::collections::HashMap;

use iconfield_application::{ClassBinding, SchemaRegistry};
use iconfield_domain::{DomainError, Identifier};

/// Class-to-table bindings, loaded from configuration by the driver.
#[derive(Debug, Clone, Default)]
pub struct MapSchemaRegistry {
    classes: HashMap<String, ClassBinding>,
}

impl MapSchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(
        &mut self,
        classname: &str,
        table: &str,
        versioned: bool,
    ) -> Result<(), DomainError> {
        let table_name = Identifier::new(table)?;
        self.classes.insert(
            classname.to_string(),
            ClassBinding {
                table_name,
                versioned,
            },
        );
        Ok(())
    }
}

impl SchemaRegistry for MapSchemaRegistry {
    fn resolve_class(&self, classname: &str) -> Option<ClassBinding> {
        self.classes.get(classname).cloned()
    }
}
