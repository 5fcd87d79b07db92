//! Application configuration values
//! Loaded by the config service; defaults mirror the storefront's built-in labels

use serde::{Deserialize, Serialize};

/// Labels and fallbacks applied while normalizing imported rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Category assigned to every product of an import batch
    pub category_label: String,

    /// Company used when no company column is mapped or the cell is blank
    pub unknown_company: String,

    /// Active ingredient used when no ingredient column is mapped or the cell is blank
    pub missing_ingredient: String,

    /// Encoding label tried for CSV files that are neither UTF-8 nor BOM-marked
    pub csv_fallback_encoding: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            category_label: "Imported".to_string(),
            unknown_company: "Unknown Company".to_string(),
            missing_ingredient: "N/A".to_string(),
            csv_fallback_encoding: "windows-1256".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// tracing filter directive, e.g. "info" or "pharmashop_lib=debug"
    pub log_filter: String,

    /// Currency shown next to prices
    pub currency: String,

    /// Default output path for the downloadable template
    pub template_file: String,

    pub import: ImportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            currency: "EGP".to_string(),
            template_file: "pharma_products_template.csv".to_string(),
            import: ImportSettings::default(),
        }
    }
}

impl AppConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("log_filter", &self.log_filter),
            ("currency", &self.currency),
            ("template_file", &self.template_file),
            ("import.category_label", &self.import.category_label),
            ("import.unknown_company", &self.import.unknown_company),
            ("import.missing_ingredient", &self.import.missing_ingredient),
            ("import.csv_fallback_encoding", &self.import.csv_fallback_encoding),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{} must not be empty", key));
            }
        }
        Ok(())
    }
}
