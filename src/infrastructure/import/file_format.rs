// ============================================================
// FILE FORMAT DETECTION
// ============================================================
// Decide how an uploaded file is decoded from its extension alone

use std::fmt;
use std::path::Path;

use crate::domain::error::ImportError;

/// Tabular formats the importer can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    /// Detect the format of `file_name` by its (case-insensitive) extension
    pub fn detect(file_name: &str) -> Result<Self, ImportError> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .ok_or_else(|| ImportError::UnsupportedFormat(file_name.to_string()))?;

        match ext.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" => Ok(FileFormat::Xlsx),
            "xls" => Ok(FileFormat::Xls),
            _ => Err(ImportError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Csv => write!(f, "csv"),
            FileFormat::Xlsx => write!(f, "xlsx"),
            FileFormat::Xls => write!(f, "xls"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_supported_extensions() {
        assert_eq!(FileFormat::detect("catalog.csv").unwrap(), FileFormat::Csv);
        assert_eq!(FileFormat::detect("Catalog.XLSX").unwrap(), FileFormat::Xlsx);
        assert_eq!(FileFormat::detect("/tmp/old.xls").unwrap(), FileFormat::Xls);
    }

    #[test]
    fn test_reject_other_extensions() {
        assert_eq!(
            FileFormat::detect("catalog.pdf"),
            Err(ImportError::UnsupportedFormat("catalog.pdf".to_string()))
        );
        assert!(FileFormat::detect("catalog").is_err());
        assert!(FileFormat::detect("catalog.csv.bak").is_err());
    }
}
