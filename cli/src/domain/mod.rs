//! Domain layer: pure types, command builders, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::fs`.
//! All functions are synchronous and take data in, returning data out.

pub mod audit;
pub mod command;
pub mod config;
pub mod error;
pub mod operation;
pub mod settings;

pub use audit::{AuditRecord, CommandInvocation, CommandResult, ExitOutcome};
pub use command::ShellCommand;
pub use config::CustomizationConfig;
pub use error::{
    AuditLogError, CommandBuildError, ConfigError, ExecutionError, PrivilegeError,
    UnknownOperation,
};
pub use operation::{MenuChoice, Operation};
pub use settings::Settings;
