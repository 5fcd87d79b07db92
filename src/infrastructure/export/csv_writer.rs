use std::io::Write;

use csv::WriterBuilder;

use super::{ExportRow, EXPORT_COLUMNS};
use crate::domain::catalog::Product;
use crate::domain::error::AppError;

/// Write `products` as CSV with a header row, returning the inner writer
pub fn write_csv<W: Write>(products: &[Product], writer: W) -> Result<W, AppError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer
        .write_record(EXPORT_COLUMNS)
        .map_err(|e| AppError::ExportError(format!("Failed to write CSV header: {}", e)))?;

    for product in products {
        writer
            .serialize(ExportRow::from(product))
            .map_err(|e| AppError::ExportError(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::ExportError(format!("Failed to flush CSV: {}", e)))
}
