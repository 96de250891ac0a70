use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub color: bool,
    /// Start the text view collapsed
    pub collapsed: bool,
    pub pager: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub title: String,
    pub open_browser: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: true,
            collapsed: false,
            pager: true,
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title: "Terraform Plan".to_string(),
            open_browser: false,
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    /// Load from `config_path`; a missing file yields the defaults
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(config_path)
            .map_err(|e| AppError::Io(format!("{}: {}", config_path.display(), e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.html.title.trim().is_empty() {
            return Err(AppError::Config("HTML title cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tfplan")
            .join("config.toml")
    }
}
