use std::path::Path;

use crate::domain::error::ImportError;

/// A user-supplied file: its name (for format detection) and raw bytes
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read `path` into memory. This is the only suspension point of an import.
    pub async fn open(path: &Path) -> Result<Self, ImportError> {
        let content = tokio::fs::read(path).await.map_err(|e| {
            ImportError::DecodeError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(Self::new(path.display().to_string(), content))
    }
}
