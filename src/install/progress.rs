//! Progress reporting types for plan execution.
//!
//! The [`InstallProgress`] enum represents discrete stages of a run that are
//! reported to the caller via a callback.

use crate::Platform;

/// Progress stages while executing a plan.
///
/// # Example
///
/// ```rust
/// use install_deps::InstallProgress;
///
/// fn on_progress(progress: InstallProgress) {
///     match &progress {
///         InstallProgress::Started { platform } => {
///             println!("Installing dependencies on {}", platform);
///         }
///         InstallProgress::CheckingPrerequisites => {
///             println!("Checking prerequisites...");
///         }
///         InstallProgress::RunningStep { index, total, description, .. } => {
///             println!("[{}/{}] {}", index, total, description);
///         }
///         InstallProgress::SkippedStep { command, .. } => {
///             println!("would run: {}", command);
///         }
///         InstallProgress::Completed { .. } => println!("Done."),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub enum InstallProgress {
    /// Execution has started.
    Started {
        /// The resolved platform.
        platform: Platform,
    },

    /// Checking that required tools are present.
    CheckingPrerequisites,

    /// A step is about to run.
    RunningStep {
        /// 1-based position of the step.
        index: usize,
        /// Number of steps in the plan.
        total: usize,
        /// Human-readable description.
        description: String,
        /// The command line, elevated if applicable.
        command: String,
    },

    /// A step was not run because this is a dry run.
    SkippedStep {
        /// 1-based position of the step.
        index: usize,
        /// Number of steps in the plan.
        total: usize,
        /// The command line that would have run.
        command: String,
    },

    /// All steps finished.
    Completed {
        /// The resolved platform.
        platform: Platform,
    },
}

impl InstallProgress {
    /// Get a human-readable description of the current progress stage.
    ///
    /// # Example
    ///
    /// ```rust
    /// use install_deps::InstallProgress;
    ///
    /// let progress = InstallProgress::CheckingPrerequisites;
    /// assert_eq!(progress.description(), "Checking prerequisites");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::Started { .. } => "Starting installation",
            Self::CheckingPrerequisites => "Checking prerequisites",
            Self::RunningStep { .. } => "Running step",
            Self::SkippedStep { .. } => "Skipping step (dry run)",
            Self::Completed { .. } => "Installation complete",
        }
    }

    /// Check if this progress stage indicates completion.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Options for controlling plan execution.
///
/// # Example
///
/// ```rust
/// use install_deps::InstallOptions;
///
/// let options = InstallOptions::default();
/// assert!(!options.dry_run);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Report each command instead of running it.
    ///
    /// Prerequisite checks are skipped as well, so a plan can be previewed on
    /// a machine that lacks the package manager.
    ///
    /// Default: `false`
    pub dry_run: bool,
}
