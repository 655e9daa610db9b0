//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` runs command lines through `sh -c` and captures both
//! streams. Without a timeout it waits for the child indefinitely.

use std::io;
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;

use crate::application::ports::CommandRunner;
use crate::domain::ExecutionError;

/// Shell used to interpret command lines.
pub const DEFAULT_SHELL: &str = "sh";

/// Production `CommandRunner` backed by `tokio::process`.
///
/// When a timeout is given, `tokio::select!` races the child against a sleep
/// and explicitly kills the child if the sleep wins; dropping the future
/// alone does not terminate the OS process on every platform. On Unix a
/// timed shell leads its own process group, and the whole group is killed so
/// that commands the shell forked do not outlive it.
pub struct TokioCommandRunner {
    shell: String,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_shell(
        &self,
        command: &str,
        timeout: Option<Duration>,
    ) -> Result<Output, ExecutionError> {
        let mut cmd = tokio::process::Command::new(&self.shell);
        cmd.arg("-c")
            .arg(command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        // A background group cannot read the terminal, so only timed runs get one.
        #[cfg(unix)]
        if timeout.is_some() {
            cmd.process_group(0);
        }
        let mut child = cmd
            .spawn()
            .map_err(|e| ExecutionError::Spawn {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        let Some(limit) = timeout else {
            return collect(&mut child, command).await;
        };

        tokio::select! {
            result = collect(&mut child, command) => result,
            () = tokio::time::sleep(limit) => {
                kill_process_group(&child);
                let _ = child.kill().await;
                Err(ExecutionError::TimedOut {
                    command: command.to_string(),
                    timeout: limit,
                })
            }
        }
    }
}

/// Wait for `child` while draining stdout and stderr.
///
/// Both pipes are read concurrently with `wait()`: a child that writes more
/// than the OS pipe buffer blocks until someone reads, so waiting first
/// would deadlock.
async fn collect(child: &mut Child, command: &str) -> Result<Output, ExecutionError> {
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();
    let (status, stdout, stderr) = tokio::join!(
        child.wait(),
        read_all(stdout_handle),
        read_all(stderr_handle),
    );
    let failed = |what: &str, e: io::Error| ExecutionError::Spawn {
        command: command.to_string(),
        reason: format!("{what}: {e}"),
    };
    let status = status.map_err(|e| failed("waiting for child", e))?;
    let stdout = stdout.map_err(|e| failed("reading stdout", e))?;
    let stderr = stderr.map_err(|e| failed("reading stderr", e))?;
    Ok(Output {
        status,
        stdout,
        stderr,
    })
}

async fn read_all<R: AsyncRead + Unpin>(handle: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        h.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

/// Send `SIGKILL` to the process group led by `child`.
#[cfg(unix)]
#[allow(unsafe_code)]
fn kill_process_group(child: &Child) {
    let Some(pgid) = child.id().and_then(|pid| i32::try_from(pid).ok()) else {
        return;
    };
    // SAFETY: kill(2) takes plain integers; a negative pid addresses the group.
    let rc = unsafe { libc::kill(-pgid, libc::SIGKILL) };
    if rc == -1 {
        tracing::warn!(pgid, error = %io::Error::last_os_error(), "failed to kill process group");
    }
}

#[cfg(not(unix))]
fn kill_process_group(_child: &Child) {}
