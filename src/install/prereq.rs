//! Prerequisite checking for detection and installation.
//!
//! This module provides pre-flight checks that fail early with
//! [`InstallError::MissingPrerequisiteTool`] instead of halfway through a plan.

use crate::detection::find_executable;
use crate::{InstallError, InstallPlan};
use std::path::PathBuf;
use tracing::debug;

/// Tool that identifies the kernel.
const KERNEL_TOOL: &str = "uname";

/// Check that the kernel can be identified.
///
/// Without `uname` every host would resolve to an unrecognized platform, so
/// this is reported as a missing tool instead.
pub fn can_detect() -> Result<(), InstallError> {
    check_tool(KERNEL_TOOL).map(|_| ())
}

/// Check that every tool the plan runs is present.
///
/// # Example
///
/// ```rust,no_run
/// use install_deps::{can_install, detect, resolve};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let signal = detect().await;
///     if let Ok(plan) = resolve(&signal) {
///         match can_install(&plan) {
///             Ok(()) => println!("Ready to install"),
///             Err(e) => eprintln!("{}: {}", e, e.fix_suggestion()),
///         }
///     }
/// }
/// ```
pub fn can_install(plan: &InstallPlan) -> Result<(), InstallError> {
    for tool in plan.required_tools() {
        check_tool(tool)?;
    }
    Ok(())
}

fn check_tool(name: &str) -> Result<PathBuf, InstallError> {
    match find_executable(name) {
        Some(path) => {
            debug!(tool = name, path = %path.display(), "Found prerequisite tool");
            Ok(path)
        }
        None => Err(InstallError::missing_tool(name, install_url(name))),
    }
}

fn install_url(tool: &str) -> Option<&'static str> {
    match tool {
        "brew" => Some("https://brew.sh"),
        _ => None,
    }
}
