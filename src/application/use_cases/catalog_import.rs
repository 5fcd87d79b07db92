// ============================================================
// CATALOG IMPORT USE CASE
// ============================================================
// Orchestrate format detection, decoding and normalization

use std::path::Path;

use chrono::Utc;
use tracing::info;

use super::normalizer::ProductNormalizer;
use crate::domain::app_config::ImportSettings;
use crate::domain::catalog::{ImportBatch, RawRow};
use crate::domain::error::{AppError, ImportError};
use crate::infrastructure::import::{
    encoding_for_label, CsvReader, FileFormat, UploadedFile, WorkbookReader,
};

/// Imports an uploaded catalog file into a product batch
pub struct CatalogImporter {
    csv_reader: CsvReader,
    normalizer: ProductNormalizer,
}

impl CatalogImporter {
    pub fn new(settings: ImportSettings) -> Result<Self, AppError> {
        let encoding = encoding_for_label(&settings.csv_fallback_encoding).ok_or_else(|| {
            AppError::ConfigError(format!(
                "Unknown encoding label: {}",
                settings.csv_fallback_encoding
            ))
        })?;

        Ok(Self {
            csv_reader: CsvReader::new().with_fallback_encoding(encoding),
            normalizer: ProductNormalizer::new(settings),
        })
    }

    /// Import the file at `path`.
    ///
    /// The extension is checked before anything is read, so unsupported
    /// files fail without touching the disk.
    pub async fn import_path(&self, path: &Path) -> Result<ImportBatch, ImportError> {
        FileFormat::detect(&path.display().to_string())?;
        let file = UploadedFile::open(path).await?;
        self.import(&file)
    }

    /// Import an in-memory file
    pub fn import(&self, file: &UploadedFile) -> Result<ImportBatch, ImportError> {
        let format = FileFormat::detect(&file.name)?;
        let rows = self.decode(format, &file.content)?;
        let normalized = self.normalizer.normalize(&rows)?;

        info!(
            source = %file.name,
            file_format = %format,
            rows = rows.len(),
            imported = normalized.count,
            dropped = normalized.dropped,
            "Successfully loaded {} products",
            normalized.count
        );

        Ok(ImportBatch {
            source: file.name.clone(),
            products: normalized.products,
            count: normalized.count,
            dropped: normalized.dropped,
            mapping: normalized.mapping,
            imported_at: Utc::now(),
        })
    }

    fn decode(&self, format: FileFormat, content: &[u8]) -> Result<Vec<RawRow>, ImportError> {
        match format {
            FileFormat::Csv => self.csv_reader.parse_bytes(content),
            FileFormat::Xlsx => WorkbookReader::read_xlsx(content),
            FileFormat::Xls => WorkbookReader::read_xls(content),
        }
    }
}

impl Default for CatalogImporter {
    fn default() -> Self {
        Self {
            csv_reader: CsvReader::default(),
            normalizer: ProductNormalizer::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::sample_products;
    use crate::infrastructure::export::{build_workbook, write_csv};

    #[test]
    fn test_import_csv_file() {
        let file = UploadedFile::new(
            "catalog.csv",
            "Name,Active Ingredient,Company,Price\nPanadol,Paracetamol,GSK,46\n,,,10\nBrufen,Ibuprofen,Abbott,78\n",
        );

        let batch = CatalogImporter::default().import(&file).unwrap();
        assert_eq!(batch.source, "catalog.csv");
        assert_eq!(batch.count, 2);
        assert_eq!(batch.products[1].company, "Abbott");
        assert_eq!(batch.mapping.active_ingredient.as_deref(), Some("Active Ingredient"));
    }

    #[test]
    fn test_blank_name_row_counted_as_dropped() {
        let file = UploadedFile::new("catalog.csv", "Name,Price\nPanadol,46\n,10\n");
        let batch = CatalogImporter::default().import(&file).unwrap();
        assert_eq!(batch.count, 1);
        assert_eq!(batch.dropped, 1);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = UploadedFile::new("catalog.pdf", b"%PDF-1.4".to_vec());
        let err = CatalogImporter::default().import(&file).unwrap_err();
        assert_eq!(err, ImportError::UnsupportedFormat("catalog.pdf".to_string()));
    }

    #[tokio::test]
    async fn test_unsupported_path_is_not_read() {
        // The file does not exist; detection must fail before any read
        let path = std::env::temp_dir().join(format!("{}.pdf", uuid::Uuid::new_v4()));
        let err = CatalogImporter::default().import_path(&path).await.unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_header_only_csv_is_empty_input() {
        let file = UploadedFile::new("catalog.csv", "Name,Price\n");
        let err = CatalogImporter::default().import(&file).unwrap_err();
        assert_eq!(err, ImportError::EmptyInput);
    }

    #[test]
    fn test_missing_columns_in_csv() {
        let file = UploadedFile::new("catalog.csv", "Title,Qty\nPanadol,3\n");
        let err = CatalogImporter::default().import(&file).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find required columns: Name and Price"
        );
    }

    #[test]
    fn test_corrupt_workbook() {
        let file = UploadedFile::new("catalog.xlsx", b"not a workbook".to_vec());
        let err = CatalogImporter::default().import(&file).unwrap_err();
        assert!(matches!(err, ImportError::DecodeError(_)));
    }

    #[test]
    fn test_template_round_trips_through_csv() {
        let samples = sample_products();
        let bytes = write_csv(&samples, Vec::new()).unwrap();
        let file = UploadedFile::new("pharma_products_template.csv", bytes);

        let batch = CatalogImporter::default().import(&file).unwrap();
        assert_eq!(batch.count, samples.len());
        assert_eq!(batch.products[29].name, "1,2,3");
        assert_eq!(batch.products[29].company, "Hikma");
        assert_eq!(batch.products[0].description, "20 Capsules - Vitamin A supplement");
        assert!(batch
            .products
            .iter()
            .all(|p| p.category.as_deref() == Some("Imported")));
    }

    #[test]
    fn test_template_round_trips_through_xlsx() {
        let samples = sample_products();
        let mut workbook = build_workbook(&samples).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();
        let file = UploadedFile::new("template.xlsx", bytes);

        let batch = CatalogImporter::default().import(&file).unwrap();
        assert_eq!(batch.count, samples.len());
        assert_eq!(batch.products[19].name, "Lantus SoloStar");
        assert_eq!(batch.products[19].price, 1287.0);
    }

    #[test]
    fn test_import_legacy_xls_file() {
        let bytes = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/catalog.xls"
        ));
        let file = UploadedFile::new("catalog.xls", bytes.to_vec());

        let batch = CatalogImporter::default().import(&file).unwrap();
        assert_eq!(batch.count, 2);
        assert_eq!(batch.mapping.price, "السعر");
        assert_eq!(batch.products[0].name, "Panadol");
        assert_eq!(batch.products[0].company, "GSK");
        assert_eq!(batch.products[1].price, 78.5);
    }

    #[test]
    fn test_unknown_encoding_setting() {
        let settings = ImportSettings {
            csv_fallback_encoding: "nope".to_string(),
            ..ImportSettings::default()
        };
        assert!(CatalogImporter::new(settings).is_err());
    }
}
