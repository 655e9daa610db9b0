//! Typed builders for the shell commands each operation runs.
//!
//! Commands are still executed through `sh -c`, but every argument taken
//! from configuration is validated and shell-quoted here, so a value reaches
//! the target program as the argument it was written as.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::CommandBuildError;

/// Debian package name, with optional `:arch` qualifier and `=version` pin.
pub static PACKAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9][a-z0-9+.\-]+(:[a-z0-9\-]+)?(=[A-Za-z0-9.+~:\-]+)?$")
        .expect("valid regex")
});

/// GSettings schema ids, keys and relocatable paths.
pub static SETTING_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9._:/\-]+$").expect("valid regex")
});

/// Packages making up the desktop installed by the "Install GNOME" step.
pub const GNOME_PACKAGES: &[&str] = &["gnome-core", "gnome-terminal", "gnome-tweak-tool"];

/// Directories archived by the backup step.
pub const BACKUP_SOURCES: &[&str] = &["/home", "/etc", "/var"];

/// A complete command line ready to hand to `sh -c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    text: String,
}

impl ShellCommand {
    /// Wrap a free-form command line. The caller is trusted.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Join constant words without quoting.
    fn literal(words: &[&str]) -> Self {
        Self {
            text: words.join(" "),
        }
    }

    /// Join words, shell-quoting each one.
    fn quoted<S: AsRef<str>>(words: &[S]) -> Result<Self, CommandBuildError> {
        let mut parts = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            let quoted =
                shlex::try_quote(word).map_err(|_| CommandBuildError::NulByte(word.to_string()))?;
            parts.push(quoted.into_owned());
        }
        Ok(Self {
            text: parts.join(" "),
        })
    }

    /// Run `next` only when `self` succeeds (`a && b`).
    #[must_use]
    pub fn and_then(self, next: Self) -> Self {
        Self {
            text: format!("{} && {}", self.text, next.text),
        }
    }

    /// The command line as passed to the shell.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    // ── Package management ───────────────────────────────────────────────────

    /// `apt-get update && apt-get upgrade -y`
    #[must_use]
    pub fn apt_update_upgrade() -> Self {
        Self::literal(&["apt-get", "update"]).and_then(Self::literal(&["apt-get", "upgrade", "-y"]))
    }

    /// `apt-get install -y <packages...>` after validating every name.
    ///
    /// # Errors
    ///
    /// Returns [`CommandBuildError::InvalidPackage`] for the first name that
    /// is not a valid Debian package name.
    pub fn apt_install<S: AsRef<str>>(packages: &[S]) -> Result<Self, CommandBuildError> {
        let mut words = vec!["apt-get", "install", "-y"];
        for package in packages {
            let package = package.as_ref();
            if !PACKAGE_NAME_RE.is_match(package) {
                return Err(CommandBuildError::InvalidPackage(package.to_string()));
            }
            words.push(package);
        }
        Self::quoted(&words)
    }

    /// `apt-get install -y gnome-core gnome-terminal gnome-tweak-tool`
    #[must_use]
    pub fn install_gnome() -> Self {
        let mut words = vec!["apt-get", "install", "-y"];
        words.extend_from_slice(GNOME_PACKAGES);
        Self::literal(&words)
    }

    /// `apt-get autoremove -y && apt-get autoclean -y`
    #[must_use]
    pub fn apt_cleanup() -> Self {
        Self::literal(&["apt-get", "autoremove", "-y"])
            .and_then(Self::literal(&["apt-get", "autoclean", "-y"]))
    }

    // ── Desktop ──────────────────────────────────────────────────────────────

    /// `update-alternatives --set x-session-manager /usr/bin/gnome-session`
    #[must_use]
    pub fn set_gnome_default_session() -> Self {
        Self::literal(&[
            "update-alternatives",
            "--set",
            "x-session-manager",
            "/usr/bin/gnome-session",
        ])
    }

    /// `gsettings set <setting> <value>`.
    ///
    /// `setting` may be a single dotted key or `schema key`; each word must be
    /// a plain identifier. `value` is passed as one argument.
    ///
    /// # Errors
    ///
    /// Returns an error when the setting is empty or contains characters
    /// outside `[A-Za-z0-9._:/-]`, or when the value holds a NUL byte.
    pub fn gsettings_set(setting: &str, value: &str) -> Result<Self, CommandBuildError> {
        let setting_words = split_words(setting)?;
        if setting_words.is_empty() || !setting_words.iter().all(|w| SETTING_WORD_RE.is_match(w)) {
            return Err(CommandBuildError::InvalidSetting(setting.to_string()));
        }
        let mut words = vec!["gsettings".to_string(), "set".to_string()];
        words.extend(setting_words);
        words.push(value.to_string());
        Self::quoted(&words)
    }

    // ── Network ──────────────────────────────────────────────────────────────

    /// `nmcli connection modify <connection...> <arguments...>`.
    ///
    /// Both `connection` and `arguments` are split shell-style, so a key may
    /// carry leading words such as `"eth0 ipv4.method"`, and a name with
    /// spaces is written quoted (`"'Wired connection 1'"`). The arguments are
    /// property/value words, e.g. `"ipv4.method manual ipv4.addresses 10.0.0.2/24"`.
    ///
    /// # Errors
    ///
    /// Returns an error when either part is empty, has unbalanced quotes,
    /// or contains a NUL byte.
    pub fn nmcli_modify(connection: &str, arguments: &str) -> Result<Self, CommandBuildError> {
        let connection_words = split_words(connection)?;
        let args = split_words(arguments)
            .map_err(|_| CommandBuildError::UnbalancedQuotes(connection.to_string()))?;
        if connection_words.is_empty() {
            return Err(CommandBuildError::InvalidSetting(connection.to_string()));
        }
        if args.is_empty() {
            return Err(CommandBuildError::EmptyValue(connection.to_string()));
        }
        let mut words = vec![
            "nmcli".to_string(),
            "connection".to_string(),
            "modify".to_string(),
        ];
        words.extend(connection_words);
        words.extend(args);
        Self::quoted(&words)
    }

    // ── Backup and scripts ───────────────────────────────────────────────────

    /// `tar -czf <archive> /home /etc /var`
    ///
    /// # Errors
    ///
    /// Returns an error if the archive path contains a NUL byte.
    pub fn backup_archive(archive: &Path) -> Result<Self, CommandBuildError> {
        let archive = archive.to_string_lossy();
        let mut words = vec!["tar", "-czf", archive.as_ref()];
        words.extend_from_slice(BACKUP_SOURCES);
        Self::quoted(&words)
    }

    /// `bash <script>`
    ///
    /// # Errors
    ///
    /// Returns an error if the script path contains a NUL byte.
    pub fn run_script(script: &Path) -> Result<Self, CommandBuildError> {
        let script = script.to_string_lossy();
        Self::quoted(&["bash", script.as_ref()])
    }

    // ── Health ───────────────────────────────────────────────────────────────

    /// `df -h`, `free -h`, `uptime`
    #[must_use]
    pub fn health_checks() -> [Self; 3] {
        [
            Self::literal(&["df", "-h"]),
            Self::literal(&["free", "-h"]),
            Self::literal(&["uptime"]),
        ]
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn split_words(text: &str) -> Result<Vec<String>, CommandBuildError> {
    shlex::split(text).ok_or_else(|| CommandBuildError::UnbalancedQuotes(text.to_string()))
}

// ── Unit tests ───────────────────────────────────────────────────────────────
