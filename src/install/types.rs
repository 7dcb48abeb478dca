//! Type definitions for install plans.
//!
//! This module defines the data structures that describe what will be run on
//! the host. The types support both programmatic execution and human-readable
//! display.

use crate::{PackageManager, Platform};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Program used to wrap system-mutating commands for unprivileged users.
pub const ELEVATION_PROGRAM: &str = "sudo";

/// Where a step writes to.
///
/// This decides whether the step is subject to elevation.
///
/// # Example
///
/// ```rust
/// use install_deps::{InstallLocation, PackageManager};
///
/// assert_eq!(PackageManager::Apt.location(), InstallLocation::System);
/// assert_eq!(PackageManager::Homebrew.location(), InstallLocation::UserLocal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallLocation {
    /// User-owned prefix (no sudo required).
    ///
    /// Homebrew installs into a prefix owned by the invoking user and
    /// refuses to run as root.
    UserLocal,

    /// System-owned state: the package database, `/etc/apt`.
    System,
}

/// A structured command for programmatic execution.
///
/// # Example
///
/// ```rust
/// use install_deps::StructuredCommand;
///
/// let cmd = StructuredCommand::new("apt-get", ["update"]);
/// assert_eq!(cmd.raw_command(), "apt-get update");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredCommand {
    /// The program to execute (e.g., "apt-get", "sudo").
    pub program: String,

    /// Arguments to pass to the program.
    pub args: Vec<String>,

    /// Data written to the program's standard input, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdin: Option<String>,
}

impl StructuredCommand {
    /// Build a command without standard input.
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            stdin: None,
        }
    }

    /// Attach data to feed on standard input.
    pub fn with_stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Raw command string for display/copy-paste.
    pub fn raw_command(&self) -> String {
        let mut raw = String::new();
        if let Some(input) = &self.stdin {
            raw.push_str(&format!("echo {:?} | ", input.trim_end()));
        }
        raw.push_str(&self.program);
        for arg in &self.args {
            raw.push(' ');
            raw.push_str(arg);
        }
        raw
    }
}

/// Privilege elevation policy for a run.
///
/// Decided once per run from the principal's identity, independent of the
/// platform branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Elevation {
    /// Running as root; commands run as-is.
    None,

    /// Not root; system steps are prefixed with `sudo`.
    Sudo,
}

impl Elevation {
    /// Pick the policy for a principal.
    pub fn for_principal(privileged: bool) -> Self {
        if privileged {
            Self::None
        } else {
            Self::Sudo
        }
    }

    /// Whether this policy wraps commands at `location`.
    pub fn applies_to(&self, location: InstallLocation) -> bool {
        matches!((self, location), (Self::Sudo, InstallLocation::System))
    }

    /// Wrap `command` if the policy applies to `location`.
    pub fn wrap(&self, command: StructuredCommand, location: InstallLocation) -> StructuredCommand {
        if !self.applies_to(location) {
            return command;
        }
        let mut args = Vec::with_capacity(command.args.len() + 1);
        args.push(command.program);
        args.extend(command.args);
        StructuredCommand {
            program: ELEVATION_PROGRAM.to_string(),
            args,
            stdin: command.stdin,
        }
    }
}

/// A single mutating step of an install plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Append one line to a package source list.
    AppendSourceLine {
        /// The source list file.
        path: PathBuf,
        /// The line to append, without trailing newline.
        line: String,
    },

    /// Remove packages that conflict with the ones being installed.
    RemovePackages {
        /// Manager to remove with.
        manager: PackageManager,
        /// Packages to remove.
        packages: Vec<String>,
    },

    /// Refresh the package index.
    RefreshIndex {
        /// Manager whose index is refreshed.
        manager: PackageManager,
    },

    /// Install the dependency list in one batch.
    InstallPackages {
        /// Manager to install with.
        manager: PackageManager,
        /// Packages to install, in order.
        packages: Vec<String>,
    },
}

impl Step {
    /// Human-readable description of the step.
    pub fn description(&self) -> String {
        match self {
            Self::AppendSourceLine { path, .. } => {
                format!("Adding package source to {}", path.display())
            }
            Self::RemovePackages { packages, .. } => {
                format!("Removing conflicting packages: {}", packages.join(" "))
            }
            Self::RefreshIndex { manager } => {
                format!("Refreshing {} package index", manager.display_name())
            }
            Self::InstallPackages { manager, packages } => format!(
                "Installing {} packages with {}",
                packages.len(),
                manager.display_name()
            ),
        }
    }

    /// Where the step writes to.
    pub fn location(&self) -> InstallLocation {
        match self {
            Self::AppendSourceLine { .. } => InstallLocation::System,
            Self::RemovePackages { manager, .. }
            | Self::RefreshIndex { manager }
            | Self::InstallPackages { manager, .. } => manager.location(),
        }
    }

    /// The unelevated command that performs the step.
    ///
    /// Returns `None` for a refresh on a manager without a separate refresh.
    pub fn command(&self) -> Option<StructuredCommand> {
        match self {
            Self::AppendSourceLine { path, line } => Some(
                StructuredCommand::new("tee", ["-a".to_string(), path.display().to_string()])
                    .with_stdin(format!("{}\n", line)),
            ),
            Self::RemovePackages { manager, packages } => Some(manager.remove_command(packages)),
            Self::RefreshIndex { manager } => manager.refresh_command(),
            Self::InstallPackages { manager, packages } => {
                Some(manager.install_command(packages))
            }
        }
    }
}

/// Everything needed to install the dependencies on one platform.
///
/// # Example
///
/// ```rust
/// use install_deps::{resolve, PlatformSignal, DistroSignal};
///
/// let signal = PlatformSignal {
///     kernel_name: Some("Linux".to_string()),
///     distro: Some(DistroSignal::ArchMarker),
///     privileged: true,
///     ..Default::default()
/// };
/// let plan = resolve(&signal).unwrap();
/// for command in plan.commands() {
///     println!("{}", command.raw_command());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallPlan {
    /// The platform branch that matched.
    #[serde(flatten)]
    pub platform: Platform,

    /// The native package manager.
    pub manager: PackageManager,

    /// Dependency package names, passed to the manager verbatim.
    pub packages: Vec<String>,

    /// Steps that run before the index refresh.
    pub extra_steps: Vec<Step>,

    /// Elevation policy for this run.
    pub elevation: Elevation,
}

impl InstallPlan {
    /// All steps in execution order: extra steps, index refresh (if the
    /// manager has one), then the batch install.
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = self.extra_steps.clone();
        if self.manager.refresh_command().is_some() {
            steps.push(Step::RefreshIndex {
                manager: self.manager,
            });
        }
        steps.push(Step::InstallPackages {
            manager: self.manager,
            packages: self.packages.clone(),
        });
        steps
    }

    /// Steps paired with their elevated commands, in execution order.
    pub fn commands_by_step(&self) -> Vec<(Step, StructuredCommand)> {
        self.steps()
            .into_iter()
            .filter_map(|step| {
                let command = step.command()?;
                let command = self.elevation.wrap(command, step.location());
                Some((step, command))
            })
            .collect()
    }

    /// Elevated commands in execution order.
    pub fn commands(&self) -> Vec<StructuredCommand> {
        self.commands_by_step().into_iter().map(|(_, c)| c).collect()
    }

    /// Executables that must be present to run this plan.
    pub fn required_tools(&self) -> Vec<&'static str> {
        let steps = self.steps();
        let mut tools = vec![self.manager.executable_name()];
        if steps
            .iter()
            .any(|s| matches!(s, Step::AppendSourceLine { .. }))
        {
            tools.push("tee");
        }
        if steps.iter().any(|s| self.elevation.applies_to(s.location())) {
            tools.push(ELEVATION_PROGRAM);
        }
        tools
    }
}
