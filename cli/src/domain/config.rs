//! Domain types for the customization file.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Customization data loaded once at startup from `customization_config.json`.
///
/// Every section is optional; a missing key is treated as empty. Mapping
/// sections keep the order in which keys appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizationConfig {
    /// Extra packages installed by the "Install Additional Software" step.
    pub additional_software: Vec<String>,
    /// `gsettings` key → value pairs applied by the "Configure GNOME" step.
    pub gnome_settings: Map<String, Value>,
    /// `nmcli` connection → property arguments applied by the network step.
    pub network_config: Map<String, Value>,
}

impl CustomizationConfig {
    /// GNOME settings as `(setting, value)` text pairs, in file order.
    pub fn gnome_settings(&self) -> impl Iterator<Item = (&str, String)> {
        setting_pairs(&self.gnome_settings)
    }

    /// Network settings as `(connection, arguments)` text pairs, in file order.
    pub fn network_settings(&self) -> impl Iterator<Item = (&str, String)> {
        setting_pairs(&self.network_config)
    }
}

fn setting_pairs(map: &Map<String, Value>) -> impl Iterator<Item = (&str, String)> {
    map.iter().map(|(k, v)| (k.as_str(), value_text(v)))
}

/// Render a JSON value the way it is substituted into a command line.
///
/// Strings are used verbatim; any other value uses its JSON text
/// (`true`, `42`, `[1,2]`).
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
