//! Shared test doubles for the application ports.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use sysprep_cli::application::ports::{Clock, LocalFs, ProgressReporter};
use sysprep_cli::application::services::execution::{ExecOptions, Execute};
use sysprep_cli::application::services::operations::Customizer;
use sysprep_cli::domain::{
    CommandResult, CustomizationConfig, ExecutionError, ExitOutcome, Settings, ShellCommand,
};

// ── Execute double ───────────────────────────────────────────────────────────

/// Records every command it is asked to run; optionally fails one of them.
#[derive(Default)]
pub struct RecordingExec {
    pub calls: RefCell<Vec<(String, ExecOptions)>>,
    /// Fail the command whose text contains this needle.
    pub fail_on: Option<String>,
    /// Stdout returned for every successful command.
    pub stdout: String,
}

impl RecordingExec {
    pub fn failing_on(needle: &str) -> Self {
        Self {
            fail_on: Some(needle.to_string()),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }
}

impl Execute for RecordingExec {
    async fn execute(
        &self,
        command: &ShellCommand,
        options: ExecOptions,
    ) -> Result<CommandResult, ExecutionError> {
        self.calls
            .borrow_mut()
            .push((command.as_str().to_string(), options));
        if let Some(needle) = &self.fail_on {
            if command.as_str().contains(needle.as_str()) {
                return Err(ExecutionError::Failed {
                    command: command.as_str().to_string(),
                    code: Some(100),
                    stderr: format!("E: {needle} failed"),
                });
            }
        }
        Ok(CommandResult {
            status: ExitOutcome::Success,
            stdout: self.stdout.clone(),
            stderr: String::new(),
        })
    }
}

// ── Reporter double ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct CapturedReporter {
    pub steps: RefCell<Vec<String>>,
    pub outputs: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
}

impl ProgressReporter for CapturedReporter {
    fn step(&self, message: &str) {
        self.steps.borrow_mut().push(message.to_string());
    }
    fn command(&self, _: &str) {}
    fn output(&self, text: &str) {
        self.outputs.borrow_mut().push(text.to_string());
    }
    fn success(&self, _: &str) {}
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

// ── Filesystem and clock doubles ─────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryFs {
    pub existing: RefCell<HashSet<PathBuf>>,
}

impl MemoryFs {
    pub fn with(paths: &[&str]) -> Self {
        Self {
            existing: RefCell::new(paths.iter().map(PathBuf::from).collect()),
        }
    }
}

impl LocalFs for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.existing.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.existing.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .and_then(|d| d.and_hms_opt(14, 3, 9))
            .unwrap_or_default()
    }
}

// ── Customizer builder ───────────────────────────────────────────────────────

pub fn config(json: &str) -> CustomizationConfig {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("bad test config: {e}"))
}

pub fn customizer<'a>(
    exec: &'a RecordingExec,
    reporter: &'a CapturedReporter,
    fs: &'a MemoryFs,
    config: &'a CustomizationConfig,
    settings: &'a Settings,
) -> Customizer<'a, RecordingExec, CapturedReporter, MemoryFs, FixedClock> {
    Customizer {
        exec,
        reporter,
        fs,
        clock: &FixedClock,
        config,
        settings,
    }
}
