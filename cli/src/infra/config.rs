//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::{ConfigError, CustomizationConfig};

/// Reads the customization file as JSON from a fixed path.
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Result<CustomizationConfig, ConfigError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                ConfigError::Unreadable {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}
