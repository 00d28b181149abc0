#![forbid(unsafe_code)]

use std::fmt;

use rowdrag_core::ConfigError;

/// Controller construction errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    InvalidConfig(ConfigError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(error) => write!(f, "invalid drag reorder config: {error}"),
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(error) => Some(error),
        }
    }
}

impl From<ConfigError> for ControllerError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfig(error)
    }
}
