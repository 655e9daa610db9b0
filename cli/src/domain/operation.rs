//! The customization steps offered by the menu and the `run` command.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::UnknownOperation;

/// One named host-customization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    UpdateSystem,
    InstallGnome,
    SetGnomeDefault,
    InstallAdditionalSoftware,
    ConfigureGnome,
    ConfigureNetwork,
    CreateBackup,
    RunPostInstallScript,
    CleanUp,
    CheckSystemHealth,
}

impl Operation {
    /// All steps in menu order (menu numbers start at 1).
    pub const ALL: [Operation; 10] = [
        Operation::UpdateSystem,
        Operation::InstallGnome,
        Operation::SetGnomeDefault,
        Operation::InstallAdditionalSoftware,
        Operation::ConfigureGnome,
        Operation::ConfigureNetwork,
        Operation::CreateBackup,
        Operation::RunPostInstallScript,
        Operation::CleanUp,
        Operation::CheckSystemHealth,
    ];

    /// Kebab-case name accepted by `sysprep run`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::UpdateSystem => "update-system",
            Self::InstallGnome => "install-gnome",
            Self::SetGnomeDefault => "set-gnome-default",
            Self::InstallAdditionalSoftware => "install-software",
            Self::ConfigureGnome => "configure-gnome",
            Self::ConfigureNetwork => "configure-network",
            Self::CreateBackup => "backup",
            Self::RunPostInstallScript => "post-install",
            Self::CleanUp => "clean-up",
            Self::CheckSystemHealth => "health",
        }
    }

    /// Menu entry text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UpdateSystem => "Update System",
            Self::InstallGnome => "Install GNOME",
            Self::SetGnomeDefault => "Set GNOME as Default",
            Self::InstallAdditionalSoftware => "Install Additional Software",
            Self::ConfigureGnome => "Configure GNOME",
            Self::ConfigureNetwork => "Configure Network Settings",
            Self::CreateBackup => "Create Backup",
            Self::RunPostInstallScript => "Run Post-Install Script",
            Self::CleanUp => "Clean Up",
            Self::CheckSystemHealth => "Check System Health",
        }
    }

    /// 1-based menu number.
    #[must_use]
    pub fn menu_number(self) -> usize {
        Self::ALL.iter().position(|op| *op == self).unwrap_or(0) + 1
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// What the user asked for at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

/// Menu number of the exit entry.
pub const EXIT_CHOICE: usize = Operation::ALL.len() + 1;

/// Parse menu input (`"1"`..`"11"`). Returns `None` for anything else.
#[must_use]
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    let number: usize = input.trim().parse().ok()?;
    if number == EXIT_CHOICE {
        return Some(MenuChoice::Exit);
    }
    let index = number.checked_sub(1)?;
    Operation::ALL.get(index).copied().map(MenuChoice::Run)
}
