use std::fmt::{Display, Formatter};

use crate::DomainError;

/// Table or column name that is safe to interpolate into a SQL statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidIdentifier(raw.to_string()));
        }
        let all_valid = trimmed
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        let starts_with_digit = trimmed
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_digit());
        if !all_valid || starts_with_digit {
            return Err(DomainError::InvalidIdentifier(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
