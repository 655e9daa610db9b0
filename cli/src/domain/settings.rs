//! Run-wide settings, built once from command-line flags.

use std::path::PathBuf;
use std::time::Duration;

/// Default customization file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "customization_config.json";
/// Default audit log location.
pub const DEFAULT_LOG_FILE: &str = "/var/log/kali_customization.log";
/// Default directory that receives backup archives.
pub const DEFAULT_BACKUP_DIR: &str = "/root/kali_backup/";
/// Default post-install script.
pub const DEFAULT_POST_INSTALL_SCRIPT: &str = "/root/post_install.sh";

/// Paths and limits shared by every step of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_file: PathBuf,
    pub log_file: PathBuf,
    pub backup_dir: PathBuf,
    pub post_install_script: PathBuf,
    /// `None` waits for each command indefinitely.
    pub command_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            post_install_script: PathBuf::from(DEFAULT_POST_INSTALL_SCRIPT),
            command_timeout: None,
        }
    }
}

/// `backup_YYYYMMDD_HHMMSS.tar.gz`
#[must_use]
pub fn backup_file_name(at: chrono::NaiveDateTime) -> String {
    format!("backup_{}.tar.gz", at.format("%Y%m%d_%H%M%S"))
}
