//! User settings for Business Center
//!
//! Manages user preferences: currency, how many line items the form allows,
//! the export file name and the log level.

use serde::{Deserialize, Serialize};

use super::paths::BusinessPaths;
use crate::error::BusinessError;
use crate::models::Money;

/// User settings for Business Center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code shown in front of every amount
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Fewest rows the input form allows per category
    #[serde(default = "default_min_items")]
    pub min_items: usize,

    /// Most rows the input form allows per category
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// File name offered for spreadsheet downloads
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Increment applied by +/- on amount fields in the TUI
    #[serde(default = "default_amount_step")]
    pub amount_step: Money,

    /// Default log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_code() -> String {
    "AED".to_string()
}

fn default_min_items() -> usize {
    1
}

fn default_max_items() -> usize {
    10
}

fn default_export_file_name() -> String {
    "business_data.xlsx".to_string()
}

fn default_amount_step() -> Money {
    Money::from_units(100, 0)
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency_code(),
            min_items: default_min_items(),
            max_items: default_max_items(),
            export_file_name: default_export_file_name(),
            amount_step: default_amount_step(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BusinessPaths) -> Result<Self, BusinessError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BusinessError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BusinessError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BusinessPaths) -> Result<(), BusinessError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BusinessError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BusinessError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Check the item bounds and step are usable
    pub fn validate(&self) -> Result<(), BusinessError> {
        if self.min_items == 0 {
            return Err(BusinessError::Config(
                "min_items must be at least 1".into(),
            ));
        }
        if self.min_items > self.max_items {
            return Err(BusinessError::Config(format!(
                "min_items ({}) cannot exceed max_items ({})",
                self.min_items, self.max_items
            )));
        }
        if !self.amount_step.is_positive() {
            return Err(BusinessError::Config("amount_step must be positive".into()));
        }
        Ok(())
    }

    /// Clamp a requested row count into the configured bounds
    pub fn clamp_item_count(&self, requested: usize) -> usize {
        requested.clamp(self.min_items, self.max_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_code, "AED");
        assert_eq!(settings.min_items, 1);
        assert_eq!(settings.max_items, 10);
        assert_eq!(settings.export_file_name, "business_data.xlsx");
        assert_eq!(settings.amount_step, Money::from_units(100, 0));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BusinessPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_code = "USD".to_string();
        settings.max_items = 25;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_code, "USD");
        assert_eq!(loaded.max_items, 25);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_code":"EUR"}"#).unwrap();
        assert_eq!(settings.currency_code, "EUR");
        assert_eq!(settings.max_items, 10);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_invalid_bounds_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BusinessPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"min_items":5,"max_items":2}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BusinessError::Config(_)));
    }

    #[test]
    fn test_clamp_item_count() {
        let settings = Settings::default();
        assert_eq!(settings.clamp_item_count(0), 1);
        assert_eq!(settings.clamp_item_count(4), 4);
        assert_eq!(settings.clamp_item_count(42), 10);
    }
}
