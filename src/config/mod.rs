use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    /// Shop name printed in report headers
    pub shop_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory the Excel and PDF reports are written into
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                shop_name: env::var("SHOP_NAME")
                    .unwrap_or_else(|_| "Handloom Shop".to_string()),
            },
            export: ExportConfig {
                output_dir: env::var("EXPORT_OUTPUT_DIR")
                    .unwrap_or_else(|_| ".".to_string())
                    .into(),
            },
        };

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.app.shop_name.trim().is_empty() {
            return Err(AppError::configuration("SHOP_NAME cannot be empty"));
        }
        if self.export.output_dir.as_os_str().is_empty() {
            return Err(AppError::configuration("EXPORT_OUTPUT_DIR cannot be empty"));
        }
        Ok(())
    }
}
