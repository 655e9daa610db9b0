//! Infrastructure implementation of the `PrivilegeProbe` port.
//!
//! The uid comes from `id -u` so the crate needs no `unsafe` libc call.
//! The probe goes straight to the runner and is never audited.

use crate::application::ports::{CommandRunner, PrivilegeProbe};
use crate::domain::PrivilegeError;

/// Asks `id -u` for the effective uid.
pub struct IdPrivilegeProbe<'a, R> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> IdPrivilegeProbe<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> PrivilegeProbe for IdPrivilegeProbe<'_, R> {
    async fn effective_uid(&self) -> Result<u32, PrivilegeError> {
        let output = self
            .runner
            .run_shell("id -u", None)
            .await
            .map_err(|e| PrivilegeError::Undetermined(e.to_string()))?;
        if !output.status.success() {
            return Err(PrivilegeError::Undetermined(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        parse_uid(&String::from_utf8_lossy(&output.stdout))
    }
}

fn parse_uid(text: &str) -> Result<u32, PrivilegeError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| PrivilegeError::Undetermined(format!("unexpected `id -u` output: {text:?}")))
}
