use rust_xlsxwriter::{Workbook, XlsxError};

use super::EXPORT_COLUMNS;
use crate::domain::catalog::Product;
use crate::domain::error::AppError;

pub const TEMPLATE_SHEET_NAME: &str = "Template";

/// Build a single-sheet workbook holding `products` under a header row
pub fn build_workbook(products: &[Product]) -> Result<Workbook, AppError> {
    fill_workbook(products).map_err(|e| AppError::ExportError(format!("Failed to build workbook: {}", e)))
}

fn fill_workbook(products: &[Product]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(TEMPLATE_SHEET_NAME)?;

    for (col, column) in EXPORT_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *column)?;
    }

    for (idx, product) in products.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, &product.name)?;
        sheet.write_string(row, 1, &product.active_ingredient)?;
        sheet.write_string(row, 2, &product.company)?;
        sheet.write_number(row, 3, product.price)?;
        sheet.write_string(row, 4, &product.description)?;
        sheet.write_string(row, 5, product.category.as_deref().unwrap_or_default())?;
    }

    Ok(workbook)
}
