// ============================================================
// WORKBOOK READER
// ============================================================
// Decode the first sheet of an Excel workbook into raw rows

use std::fmt::Display;
use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xls, Xlsx};

use crate::domain::catalog::{unique_headers, CellValue, RawRow};
use crate::domain::error::ImportError;

/// Reads `.xlsx` and `.xls` workbooks held in memory
pub struct WorkbookReader;

impl WorkbookReader {
    pub fn read_xlsx(bytes: &[u8]) -> Result<Vec<RawRow>, ImportError> {
        Self::read_first_sheet::<Xlsx<Cursor<Vec<u8>>>>(bytes)
    }

    pub fn read_xls(bytes: &[u8]) -> Result<Vec<RawRow>, ImportError> {
        Self::read_first_sheet::<Xls<Cursor<Vec<u8>>>>(bytes)
    }

    fn read_first_sheet<R>(bytes: &[u8]) -> Result<Vec<RawRow>, ImportError>
    where
        R: Reader<Cursor<Vec<u8>>>,
        R::Error: Display,
    {
        let mut workbook: R = open_workbook_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| ImportError::DecodeError(format!("Failed to open Excel file: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ImportError::DecodeError("No worksheet found".to_string()))?
            .map_err(|e| {
                ImportError::DecodeError(format!("Failed to read Excel range: {}", e))
            })?;

        Ok(Self::rows_from_range(&range))
    }

    /// Turn a sheet range into rows keyed by its first row.
    /// Fully blank data rows are skipped.
    pub fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
        let mut sheet_rows = range.rows();

        let Some(header_row) = sheet_rows.next() else {
            return Vec::new();
        };
        let headers = unique_headers(header_row.iter().map(header_text));

        let mut rows = Vec::new();
        for sheet_row in sheet_rows {
            let fields = headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let value = sheet_row.get(idx).map(cell_value).unwrap_or(CellValue::Empty);
                    (header.clone(), value)
                })
                .collect();

            let row = RawRow::new(rows.len(), fields);
            if !row.is_blank() {
                rows.push(row);
            }
        }

        rows
    }
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Bool(b) => CellValue::Bool(*b),
        // Serial date numbers, as spreadsheet tools report raw dates
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::text(s.as_str()),
        Data::Error(e) => CellValue::text(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}
