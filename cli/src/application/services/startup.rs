//! Application service: checks made once before the first step runs.

use crate::application::ports::{ConfigStore, PrivilegeProbe};
use crate::domain::{ConfigError, CustomizationConfig, PrivilegeError};

/// Uid of the superuser.
pub const ROOT_UID: u32 = 0;

/// Refuse to continue unless the process runs as root.
///
/// # Errors
///
/// Returns [`PrivilegeError::NotRoot`] for any other uid, or
/// [`PrivilegeError::Undetermined`] if the uid cannot be read.
pub async fn ensure_root(probe: &impl PrivilegeProbe) -> Result<(), PrivilegeError> {
    let uid = probe.effective_uid().await?;
    if uid != ROOT_UID {
        return Err(PrivilegeError::NotRoot { uid });
    }
    Ok(())
}

/// Load configuration.
///
/// # Errors
///
/// Propagates the store's [`ConfigError`]; there is no fallback to defaults.
pub fn load_config(store: &impl ConfigStore) -> Result<CustomizationConfig, ConfigError> {
    let config = store.load()?;
    tracing::debug!(
        packages = config.additional_software.len(),
        gnome_settings = config.gnome_settings.len(),
        network_settings = config.network_config.len(),
        "configuration loaded"
    );
    Ok(config)
}
