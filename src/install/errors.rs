//! Error types for resolution and installation.
//!
//! Each error variant includes an actionable fix suggestion so the user knows
//! where to go next. Every variant is terminal: the binary reports it and
//! exits with status 1.

use thiserror::Error;

/// Where to read about installing the dependencies by hand.
pub const MANUAL_DOCS_HINT: &str =
    "Follow the manual dependency instructions in the project's build documentation";

/// Where to ask for help.
pub const HELP_HINT: &str = "ask for help on the project's issue tracker";

/// Errors that can occur while resolving or executing an install plan.
///
/// # Example
///
/// ```rust
/// use install_deps::InstallError;
///
/// fn handle_error(error: InstallError) {
///     eprintln!("ERROR - {}", error);
///     eprintln!("{}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// A tool needed for detection or installation is not installed.
    #[error("Missing prerequisite tool: {name}")]
    MissingPrerequisiteTool {
        /// Executable name (e.g., "brew", "uname").
        name: String,
        /// URL where the tool can be obtained.
        install_url: Option<String>,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The platform is recognized but installing on it is not implemented.
    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform {
        /// The recognized platform (e.g., "FreeBSD", "Alpine").
        platform: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The platform is recognized but the release is outside the supported set.
    #[error("Unsupported {platform} version: {version}")]
    UnsupportedVersion {
        /// The recognized platform (e.g., "macOS", "Ubuntu").
        platform: String,
        /// The version or codename that was found.
        version: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// No branch matched the detected signals.
    #[error("Unrecognized platform: {description}")]
    UnrecognizedPlatform {
        /// What was detected, for the report.
        description: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// An install step exited unsuccessfully.
    ///
    /// Steps that already ran are not rolled back.
    #[error("Command failed: {command}")]
    StepFailed {
        /// The command line that failed.
        command: String,
        /// Exit code, if the process exited normally.
        exit_code: Option<i32>,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// A step could not be started because of permissions.
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Description of what permission was denied.
        message: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// A step could not be started or waited on.
    #[error("Failed to run {command}: {message}")]
    Spawn {
        /// The command line that could not run.
        command: String,
        /// Underlying I/O error.
        message: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// A report could not be written.
    #[error("Could not write output: {message}")]
    Output {
        /// Underlying serialization or I/O error.
        message: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

impl InstallError {
    /// Get an actionable suggestion for fixing this error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use install_deps::InstallError;
    ///
    /// let error = InstallError::unsupported_platform("FreeBSD");
    /// assert!(error.fix_suggestion().contains("FreeBSD"));
    /// ```
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::MissingPrerequisiteTool { fix, .. } => fix,
            Self::UnsupportedPlatform { fix, .. } => fix,
            Self::UnsupportedVersion { fix, .. } => fix,
            Self::UnrecognizedPlatform { fix, .. } => fix,
            Self::StepFailed { fix, .. } => fix,
            Self::PermissionDenied { fix, .. } => fix,
            Self::Spawn { fix, .. } => fix,
            Self::Output { fix, .. } => fix,
        }
    }

    /// A required tool is absent.
    pub fn missing_tool(name: &str, install_url: Option<&str>) -> Self {
        let fix = match install_url {
            Some(url) => format!("Install {} from {} and run again.", name, url),
            None => format!(
                "Install {} with your system package manager and run again.",
                name
            ),
        };
        Self::MissingPrerequisiteTool {
            name: name.to_string(),
            install_url: install_url.map(str::to_string),
            fix,
        }
    }

    /// A known platform without an install recipe.
    pub fn unsupported_platform(platform: &str) -> Self {
        Self::UnsupportedPlatform {
            platform: platform.to_string(),
            fix: format!(
                "Installing dependencies on {} is not implemented yet. {}, and {} if you \
                 would like to add support.",
                platform, MANUAL_DOCS_HINT, HELP_HINT
            ),
        }
    }

    /// A known platform at a release outside the supported set.
    pub fn unsupported_version(platform: &str, version: &str, supported: &str) -> Self {
        Self::UnsupportedVersion {
            platform: platform.to_string(),
            version: version.to_string(),
            fix: format!(
                "Supported {} versions are: {}. {}, or {}.",
                platform, supported, MANUAL_DOCS_HINT, HELP_HINT
            ),
        }
    }

    /// Nothing matched.
    pub fn unrecognized_platform(description: &str) -> Self {
        Self::UnrecognizedPlatform {
            description: description.to_string(),
            fix: format!(
                "Your platform could not be identified. {}, and {} so it can be added.",
                MANUAL_DOCS_HINT, HELP_HINT
            ),
        }
    }
}
