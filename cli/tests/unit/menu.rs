//! Menu loop dispatch with scripted input.

use std::collections::VecDeque;
use std::io::Cursor;

use anyhow::Result;
use sysprep_cli::commands::menu::{LineInput, MenuInput, menu_loop};
use sysprep_cli::domain::{CustomizationConfig, Settings};
use sysprep_cli::output::OutputContext;

use crate::helpers::{CapturedReporter, MemoryFs, RecordingExec, customizer};

struct Scripted(VecDeque<&'static str>);

impl Scripted {
    fn new(lines: &[&'static str]) -> Self {
        Self(lines.iter().copied().collect())
    }
}

impl MenuInput for Scripted {
    fn read_choice(&mut self) -> Result<String> {
        self.0
            .pop_front()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("input exhausted"))
    }
}

#[tokio::test]
async fn test_exit_choice_ends_loop_without_commands() {
    let exec = RecordingExec::default();
    let reporter = CapturedReporter::default();
    let fs = MemoryFs::default();
    let cfg = CustomizationConfig::default();
    let settings = Settings::default();
    let ctx = OutputContext::new(true, true);

    menu_loop(
        &customizer(&exec, &reporter, &fs, &cfg, &settings),
        &ctx,
        &mut Scripted::new(&["11"]),
    )
    .await
    .expect("loop exits cleanly");

    assert!(exec.commands().is_empty());
}

#[tokio::test]
async fn test_invalid_choice_reprompts() {
    let exec = RecordingExec::default();
    let reporter = CapturedReporter::default();
    let fs = MemoryFs::default();
    let cfg = CustomizationConfig::default();
    let settings = Settings::default();
    let ctx = OutputContext::new(true, true);
    let mut input = Scripted::new(&["banana", "0", "1", "11"]);

    menu_loop(&customizer(&exec, &reporter, &fs, &cfg, &settings), &ctx, &mut input)
        .await
        .expect("loop exits cleanly");

    assert_eq!(exec.commands(), vec!["apt-get update && apt-get upgrade -y"]);
    assert!(input.0.is_empty());
}

#[tokio::test]
async fn test_failed_step_ends_loop_and_skips_later_choices() {
    let exec = RecordingExec::failing_on("apt-get update");
    let reporter = CapturedReporter::default();
    let fs = MemoryFs::default();
    let cfg = CustomizationConfig::default();
    let settings = Settings::default();
    let ctx = OutputContext::new(true, true);
    let mut input = Scripted::new(&["1", "9", "11"]);

    let err = menu_loop(&customizer(&exec, &reporter, &fs, &cfg, &settings), &ctx, &mut input)
        .await
        .expect_err("failure propagates");

    assert!(err.to_string().contains("failed"), "got: {err}");
    assert_eq!(exec.commands().len(), 1);
    assert_eq!(input.0.len(), 2, "later selections are never read");
}

#[tokio::test]
async fn test_piped_lines_drive_the_menu() {
    let exec = RecordingExec::default();
    let reporter = CapturedReporter::default();
    let fs = MemoryFs::default();
    let cfg = CustomizationConfig::default();
    let settings = Settings::default();
    let ctx = OutputContext::new(true, true);
    let mut input = LineInput::new(Cursor::new("banana\r\n9\n11\n"));

    menu_loop(&customizer(&exec, &reporter, &fs, &cfg, &settings), &ctx, &mut input)
        .await
        .expect("loop exits cleanly");

    assert_eq!(
        exec.commands(),
        vec!["apt-get autoremove -y && apt-get autoclean -y"]
    );
}

#[test]
fn test_line_input_reports_closed_input() {
    let mut input = LineInput::new(Cursor::new("11"));
    assert_eq!(input.read_choice().expect("last line"), "11");
    let err = input.read_choice().expect_err("no more input");
    assert!(err.to_string().contains("input closed"), "got: {err}");
}
