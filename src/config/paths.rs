//! Path management for Business Center
//!
//! Provides XDG-compliant path resolution for configuration, exports, and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `BUSINESS_CENTER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/business-center` or `~/.config/business-center`
//! 3. Windows: `%APPDATA%\business-center`

use std::path::PathBuf;

use crate::error::BusinessError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUSINESS_CENTER_DATA_DIR";

/// Manages all paths used by Business Center
#[derive(Debug, Clone)]
pub struct BusinessPaths {
    /// Base directory for all Business Center files
    base_dir: PathBuf,
}

impl BusinessPaths {
    /// Create a new BusinessPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BusinessError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BusinessPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/business-center/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory exported workbooks are written to
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("business-center.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BusinessError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BusinessError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir()).map_err(|e| {
            BusinessError::Io(format!("Failed to create exports directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if Business Center has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BusinessError> {
    // XDG_CONFIG_HOME if set, otherwise ~/.config (also on macOS)
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(config_home).join("business-center"));
    }

    let base_dirs = directories::BaseDirs::new()
        .ok_or_else(|| BusinessError::Config("Could not determine home directory".into()))?;
    Ok(base_dirs.home_dir().join(".config").join("business-center"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BusinessError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BusinessError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("business-center"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BusinessPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.exports_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = BusinessPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BusinessPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.exports_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BusinessPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.log_file(),
            temp_dir.path().join("business-center.log")
        );
    }
}
