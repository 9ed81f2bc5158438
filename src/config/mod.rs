//! Configuration module for Business Center
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Form bounds and currency preferences

pub mod paths;
pub mod settings;

pub use paths::BusinessPaths;
pub use settings::Settings;
