use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidOption(String),
    MissingGroupLabel(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
            ModelError::MissingGroupLabel(group) => {
                write!(f, "group '{group}' has entries but no label")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
