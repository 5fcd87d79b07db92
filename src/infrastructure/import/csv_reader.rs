// ============================================================
// CSV READER
// ============================================================
// Decode comma-separated text into raw rows using the header-row convention

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::{Encoding, WINDOWS_1256};
use tracing::warn;

use crate::domain::catalog::{unique_headers, CellValue, RawRow};
use crate::domain::error::ImportError;

/// CSV reader with delimiter and encoding detection
pub struct CsvReader {
    /// Encoding used when the bytes are neither UTF-8 nor BOM-marked
    fallback_encoding: &'static Encoding,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            fallback_encoding: WINDOWS_1256,
        }
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.fallback_encoding = encoding;
        self
    }

    /// Decode raw file bytes and parse them
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<RawRow>, ImportError> {
        let content = self.decode_text(bytes);
        self.parse_content(&content)
    }

    /// Parse CSV content from string.
    ///
    /// The delimiter is detected from the content and cells are trimmed.
    /// The first record is the header row. Rows whose cells are all blank
    /// are skipped, short rows are padded with empty cells and surplus cells
    /// are ignored.
    pub fn parse_content(&self, content: &str) -> Result<Vec<RawRow>, ImportError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(Self::detect_delimiter(content))
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| ImportError::DecodeError(format!("Failed to read CSV headers: {}", e)))?
            .clone();
        let headers = unique_headers(headers.iter());

        let mut rows = Vec::new();

        for (line, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                ImportError::DecodeError(format!("Failed to parse CSV row {}: {}", line + 1, e))
            })?;

            let row = Self::parse_row(rows.len(), &headers, &record);
            if row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }

    /// Decode bytes to text: BOM-marked encodings first, then UTF-8, then the fallback
    fn decode_text(&self, bytes: &[u8]) -> String {
        if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
            let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
            return text.into_owned();
        }

        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => {
                warn!(
                    encoding = self.fallback_encoding.name(),
                    "CSV content is not valid UTF-8, decoding with fallback encoding"
                );
                let (text, _) = self.fallback_encoding.decode_without_bom_handling(bytes);
                text.into_owned()
            }
        }
    }

    fn parse_row(index: usize, headers: &[String], record: &StringRecord) -> RawRow {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).map(CellValue::text).unwrap_or(CellValue::Empty);
                (header.clone(), value)
            })
            .collect();

        RawRow::new(index, fields)
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .take(10)
            .collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        if sample_lines.is_empty() {
            return best_delimiter;
        }

        for &delimiter in &candidates {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

/// Resolve a WHATWG encoding label such as "windows-1256" or "latin1"
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}
