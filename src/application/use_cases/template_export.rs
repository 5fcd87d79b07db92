// ============================================================
// TEMPLATE EXPORT USE CASE
// ============================================================
// Write a catalog to disk in the importer's own column layout

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::domain::catalog::{sample_products, Product};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::export::{build_workbook, write_csv};

/// Output formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(ExportFormat::Csv),
            Some("xlsx") => Ok(ExportFormat::Xlsx),
            _ => Err(AppError::ValidationError(format!(
                "Cannot export to {}: use a .csv or .xlsx file",
                path.display()
            ))),
        }
    }
}

/// Write the built-in sample catalog as the downloadable template
pub fn export_template(path: &Path) -> Result<usize> {
    export_products(&sample_products(), path)
}

/// Write `products` to `path`, returning the number of rows written
pub fn export_products(products: &[Product], path: &Path) -> Result<usize> {
    let format = ExportFormat::from_path(path)?;

    match format {
        ExportFormat::Csv => {
            let file = File::create(path)?;
            write_csv(products, BufWriter::new(file))?.flush()?;
        }
        ExportFormat::Xlsx => {
            let mut workbook = build_workbook(products)?;
            workbook.save(path).map_err(|e| {
                AppError::ExportError(format!("Failed to save {}: {}", path.display(), e))
            })?;
        }
    }

    info!(path = %path.display(), rows = products.len(), "Catalog exported");
    Ok(products.len())
}
