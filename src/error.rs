//! Error types and handling for the `TravelOS` application

use thiserror::Error;

/// Main error type for the `TravelOS` application
#[derive(Error, Debug)]
pub enum TravelOsError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Static catalog integrity errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelOsError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new catalog integrity error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelOsError::Config { .. } => {
                "Configuration error. Please check your config file and TRAVELOS_ variables."
                    .to_string()
            }
            TravelOsError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelOsError::Catalog { message } => {
                format!("The built-in travel catalog is inconsistent: {message}")
            }
            TravelOsError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TravelOsError::config("bad port");
        assert!(matches!(config_err, TravelOsError::Config { .. }));

        let validation_err = TravelOsError::validation("budget must be positive");
        assert!(matches!(validation_err, TravelOsError::Validation { .. }));

        let catalog_err = TravelOsError::catalog("unknown city");
        assert!(matches!(catalog_err, TravelOsError::Catalog { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TravelOsError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = TravelOsError::validation("days per city must be 1-7");
        assert!(validation_err.user_message().contains("days per city must be 1-7"));

        let catalog_err = TravelOsError::catalog("route 'X' references unknown city 'Y'");
        assert!(catalog_err.user_message().contains("unknown city 'Y'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let travel_err: TravelOsError = io_err.into();
        assert!(matches!(travel_err, TravelOsError::Io { .. }));
        assert!(travel_err.user_message().contains("File operation failed"));
    }
}
