//! Probe command execution with timeout.

use crate::DetectionError;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Run a read-only probe command and return its trimmed standard output.
///
/// # Returns
///
/// `Ok(String)` with non-empty trimmed stdout, or a `DetectionError`:
/// - `Timeout` if the command takes longer than `limit`
/// - `NotFound` / `PermissionDenied` if the command cannot be started
/// - `IoError` for other I/O failures or non-zero exit codes
/// - `InvalidOutput` if stdout is empty or not valid UTF-8
pub(crate) async fn run_probe(
    program: &Path,
    args: &[&str],
    limit: Duration,
) -> Result<String, DetectionError> {
    let output = timeout(
        limit,
        Command::new(program).args(args).kill_on_drop(true).output(),
    )
    .await
    .map_err(|_| DetectionError::Timeout)?
    .map_err(DetectionError::from)?;

    if !output.status.success() {
        return Err(DetectionError::IoError);
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| DetectionError::InvalidOutput)?;
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(DetectionError::InvalidOutput);
    }
    Ok(trimmed.to_string())
}
