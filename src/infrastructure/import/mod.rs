// ============================================================
// IMPORT INFRASTRUCTURE LAYER
// ============================================================
// File reading, format detection, CSV and workbook decoding

mod csv_reader;
mod file_format;
mod uploaded_file;
mod workbook_reader;

pub use csv_reader::{encoding_for_label, CsvReader};
pub use file_format::FileFormat;
pub use uploaded_file::UploadedFile;
pub use workbook_reader::WorkbookReader;
