//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! audit log file, configuration loading, and the clock.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod audit_log;
pub mod clock;
pub mod command_runner;
pub mod config;
pub mod fs;
pub mod privilege;
