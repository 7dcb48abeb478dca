//! Plan execution.
//!
//! This module provides the [`install`] function that runs a resolved plan's
//! steps one after another with progress reporting.

use crate::install::{InstallError, InstallOptions, InstallPlan, InstallProgress, StructuredCommand};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Execute an install plan.
///
/// This function:
/// 1. Runs pre-flight checks ([`can_install`](crate::can_install)) unless
///    this is a dry run
/// 2. Runs each step in order, waiting for it to finish
/// 3. Aborts on the first failing step
///
/// Steps inherit the terminal so package managers and `sudo` can prompt.
/// There is no timeout and no rollback: a failed step leaves the host in
/// whatever state the earlier steps produced.
///
/// # Consent Model
///
/// Calling this function IS consent to install. The caller is responsible
/// for confirming with the user before calling.
///
/// # Example
///
/// ```rust,no_run
/// use install_deps::{detect, install, resolve, InstallOptions};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let signal = detect().await;
///     let plan = resolve(&signal).expect("supported platform");
///     let result = install(&plan, InstallOptions::default(), |progress| {
///         println!("{:?}", progress)
///     })
///     .await;
///
///     if let Err(e) = result {
///         eprintln!("Failed: {}. Fix: {}", e, e.fix_suggestion());
///     }
/// }
/// ```
pub async fn install<F>(
    plan: &InstallPlan,
    options: InstallOptions,
    on_progress: F,
) -> Result<(), InstallError>
where
    F: Fn(InstallProgress),
{
    on_progress(InstallProgress::Started {
        platform: plan.platform,
    });

    if !options.dry_run {
        on_progress(InstallProgress::CheckingPrerequisites);
        super::prereq::can_install(plan)?;
    }

    let steps = plan.commands_by_step();
    let total = steps.len();

    for (i, (step, command)) in steps.iter().enumerate() {
        let index = i + 1;
        let raw = command.raw_command();

        if options.dry_run {
            on_progress(InstallProgress::SkippedStep {
                index,
                total,
                command: raw,
            });
            continue;
        }

        on_progress(InstallProgress::RunningStep {
            index,
            total,
            description: step.description(),
            command: raw,
        });
        run_command(command).await?;
    }

    info!(platform = %plan.platform, steps = total, dry_run = options.dry_run, "Plan finished");
    on_progress(InstallProgress::Completed {
        platform: plan.platform,
    });
    Ok(())
}

/// Run one command to completion.
///
/// Standard output and error are inherited. Standard input is inherited
/// unless the command carries its own input, which is written and then
/// closed.
pub(crate) async fn run_command(command: &StructuredCommand) -> Result<(), InstallError> {
    let raw = command.raw_command();

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .stdin(if command.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });

    let mut child = cmd.spawn().map_err(|e| spawn_error(&raw, e))?;

    if let Some(input) = &command.stdin {
        if let Some(mut stdin) = child.stdin.take() {
            // A child that exits without reading closes the pipe; its exit
            // status is the error to report.
            match stdin.write_all(input.as_bytes()).await {
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                    debug!(command = %raw, "Child closed stdin before reading it");
                }
                result => result.map_err(|e| spawn_error(&raw, e))?,
            }
        }
    }

    let status = child.wait().await.map_err(|e| spawn_error(&raw, e))?;

    if !status.success() {
        warn!(command = %raw, code = ?status.code(), "Step failed");
        return Err(InstallError::StepFailed {
            command: raw,
            exit_code: status.code(),
            fix: "See the command output above for details. Steps that already ran were \
                  not undone; fix the problem and run again."
                .to_string(),
        });
    }

    Ok(())
}

fn spawn_error(command: &str, e: std::io::Error) -> InstallError {
    if e.kind() == std::io::ErrorKind::PermissionDenied {
        return InstallError::PermissionDenied {
            message: format!("{}: {}", command, e),
            fix: "Run as root or as a user allowed to use sudo".to_string(),
        };
    }
    InstallError::Spawn {
        command: command.to_string(),
        message: e.to_string(),
        fix: "Check that the program is installed and on PATH".to_string(),
    }
}
