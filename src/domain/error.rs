use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::ProductField;

/// Terminal failure of a single import attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImportError {
    UnsupportedFormat(String),
    DecodeError(String),
    EmptyInput,
    MissingRequiredColumns(Vec<ProductField>),
    NoValidRows,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::UnsupportedFormat(name) => write!(
                f,
                "Unsupported file format: {}. Please use CSV or Excel (.csv, .xlsx, .xls)",
                name
            ),
            ImportError::DecodeError(msg) => write!(f, "Failed to read file: {}", msg),
            ImportError::EmptyInput => write!(f, "File is empty"),
            ImportError::MissingRequiredColumns(fields) => {
                let names = fields
                    .iter()
                    .map(|field| field.label())
                    .collect::<Vec<_>>()
                    .join(" and ");
                write!(f, "Could not find required columns: {}", names)
            }
            ImportError::NoValidRows => write!(f, "No valid products found"),
        }
    }
}

impl std::error::Error for ImportError {}

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    Internal(String),
    NotFound(String),
    ValidationError(String),
    ConfigError(String),
    IoError(String),
    ImportError(ImportError),
    ExportError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
            AppError::ImportError(err) => write!(f, "Import failed: {}", err),
            AppError::ExportError(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        AppError::ImportError(err)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
