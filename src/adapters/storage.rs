use crate::domain::model::Animal;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Keeps the whole registry in a single pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Animal>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No data file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let animals: Vec<Animal> = serde_json::from_slice(&data)?;
        tracing::debug!(
            "Loaded {} animals from {}",
            animals.len(),
            self.path.display()
        );
        Ok(animals)
    }

    fn save(&self, animals: &[Animal]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(animals)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Saved {} animals to {}", animals.len(), self.path.display());
        Ok(())
    }
}
