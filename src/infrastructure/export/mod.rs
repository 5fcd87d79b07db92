// ============================================================
// EXPORT INFRASTRUCTURE LAYER
// ============================================================
// Write products as template spreadsheets (CSV or XLSX)

mod csv_writer;
mod export_row;
mod xlsx_writer;

pub use csv_writer::write_csv;
pub use export_row::{format_price, ExportRow, EXPORT_COLUMNS};
pub use xlsx_writer::{build_workbook, TEMPLATE_SHEET_NAME};
