use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "pets-nursery.toml";
pub const DEFAULT_DATA_FILE: &str = "animal_data.json";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// JSON file holding the whole registry.
    pub data_file: PathBuf,
    /// chrono format used for birthdate input and the birthdate listing.
    pub date_format: String,
    /// Debug-level logging to stderr.
    pub verbose: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            verbose: false,
        }
    }
}

impl RegistryConfig {
    /// Reads a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RegistryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Missing file means defaults; a present file must parse and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let config = Self::from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_file", &self.data_file)?;
        validation::validate_date_format("date_format", &self.date_format)?;
        Ok(())
    }
}
