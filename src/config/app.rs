//! Main application configuration
//!
//! Configuration comes from a TOML file or from environment variables, with
//! defaults for everything.

use crate::config::divisions::{standard_brackets, DivisionBracket};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub divisions: DivisionSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Division bracket settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DivisionSettings {
    pub brackets: Vec<DivisionBracket>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "medal-table".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for DivisionSettings {
    fn default() -> Self {
        Self {
            brackets: standard_brackets(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing sections use defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate brackets
    let brackets = &config.divisions.brackets;
    if brackets.is_empty() {
        return Err(anyhow!("At least one division bracket is required"));
    }

    let mut ids = HashSet::new();
    for bracket in brackets {
        if bracket.id.is_empty() {
            return Err(anyhow!("Division bracket id cannot be empty"));
        }
        if !ids.insert(bracket.id.as_str()) {
            return Err(anyhow!("Duplicate division bracket id: {}", bracket.id));
        }
        if bracket.min_age > bracket.max_age {
            return Err(anyhow!(
                "Division bracket {} has min_age {} above max_age {}",
                bracket.id,
                bracket.min_age,
                bracket.max_age
            ));
        }
    }

    for (i, a) in brackets.iter().enumerate() {
        if let Some(b) = brackets.iter().skip(i + 1).find(|b| a.overlaps(b)) {
            return Err(anyhow!(
                "Division brackets {} and {} overlap",
                a.id,
                b.id
            ));
        }
    }

    Ok(())
}
