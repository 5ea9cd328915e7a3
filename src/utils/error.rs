use crate::utils::validation::date_format_hint;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown species: '{input}'")]
    UnknownSpecies { input: String },

    #[error("Date '{input}' does not match format '{format}'")]
    InvalidDate { input: String, format: String },

    #[error("Animal not found: '{name}'")]
    AnimalNotFound { name: String },

    #[error("Incorrect menu choice: '{input}'")]
    InvalidChoice { input: String },
}

impl RegistryError {
    /// Line shown on the console when the error reaches the user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::IoError(e) => format!("File operation failed: {}", e),
            RegistryError::SerializationError(_) => "Data file is not valid JSON".to_string(),
            RegistryError::ConfigError { message } => format!("Configuration problem: {}", message),
            RegistryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            RegistryError::UnknownSpecies { .. } => "Incorrect animal genus".to_string(),
            RegistryError::InvalidDate { format, .. } => format!(
                "Incorrect data format. Please enter birthdate {}",
                date_format_hint(format)
            ),
            RegistryError::AnimalNotFound { .. } => "Animal not found".to_string(),
            RegistryError::InvalidChoice { .. } => "Incorrect choice. Please repeat".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let not_found = RegistryError::AnimalNotFound {
            name: "Rex".to_string(),
        };
        assert_eq!(not_found.user_friendly_message(), "Animal not found");
        assert_eq!(not_found.to_string(), "Animal not found: 'Rex'");

        let species = RegistryError::UnknownSpecies {
            input: "Frog".to_string(),
        };
        assert_eq!(species.user_friendly_message(), "Incorrect animal genus");

        let date = RegistryError::InvalidDate {
            input: "2020-01-01".to_string(),
            format: "%d.%m.%Y".to_string(),
        };
        assert_eq!(
            date.user_friendly_message(),
            "Incorrect data format. Please enter birthdate DD.MM.YYYY"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(RegistryError::IoError(_))));
    }
}
