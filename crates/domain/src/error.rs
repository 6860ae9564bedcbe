use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidIdentifier(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier(raw) => write!(
                f,
                "identifier must be ascii alphanumeric or underscore and not start with a digit, got {raw:?}"
            ),
        }
    }
}

impl std::error::Error for DomainError {}
