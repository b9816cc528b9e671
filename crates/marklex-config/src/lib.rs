use marklex_syntax::{CatalogError, Marker, MarkerCatalog, MarkerCategory};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid marker catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Marker literals grouped by category. Missing keys fall back to the
/// markdown catalog's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub block: Vec<String>,
    pub paired: Vec<String>,
    pub escape: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let markdown = MarkerCatalog::markdown();
        let literals = |category: MarkerCategory| {
            let mut literals: Vec<String> = markdown
                .markers()
                .iter()
                .filter(|m| m.category == category)
                .map(|m| m.literal.clone())
                .collect();
            literals.sort();
            literals
        };

        Self {
            block: literals(MarkerCategory::Block),
            paired: literals(MarkerCategory::Paired),
            escape: markdown.escape().to_string(),
        }
    }
}

impl CatalogConfig {
    /// Validates the configured literals into a [`MarkerCatalog`].
    pub fn build(&self) -> Result<MarkerCatalog, CatalogError> {
        let markers = self
            .block
            .iter()
            .map(Marker::block)
            .chain(self.paired.iter().map(Marker::paired))
            .chain(std::iter::once(Marker::escape(self.escape.as_str())));
        MarkerCatalog::new(markers)
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/marklex");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The validated marker catalog described by this config.
    pub fn catalog(&self) -> Result<MarkerCatalog, ConfigError> {
        Ok(self.catalog.build()?)
    }
}
