pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::JsonFileStorage;
pub use config::RegistryConfig;
pub use self::core::{registry::Registry, shell::RegistryShell};
pub use domain::model::{Animal, Species};
pub use utils::error::{RegistryError, Result};
