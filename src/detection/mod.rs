//! Signal sources for platform detection.
//!
//! Detection reads the host only through the [`HostProbe`] trait so the
//! decision procedure can be exercised without a real host. This module
//! provides:
//!
//! - `HostProbe`: one query per signal source
//! - `SystemProbe`: the implementation backed by the running system
//! - `find_executable`: PATH lookup with fallbacks
//! - `run_probe`: read-only command execution with a timeout
//! - `parse_os_release_name` / `parse_release`: input parsing

mod command;
mod parser;
mod path_finder;

pub(crate) use command::run_probe;
pub(crate) use parser::{parse_os_release_name, parse_release};
pub(crate) use path_finder::find_executable;

use crate::{DetectionError, HostOptions};
use std::path::PathBuf;

/// Fields `lsb_release` can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsbField {
    /// Distributor id (`-is`).
    Id,
    /// Release codename (`-cs`).
    Codename,
    /// Release number (`-rs`).
    Release,
}

impl LsbField {
    /// Short flag that prints only this field.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Id => "-is",
            Self::Codename => "-cs",
            Self::Release => "-rs",
        }
    }
}

/// Port for querying host signal sources.
///
/// Each method answers one question about the host. Failures are reported as
/// [`DetectionError`] and turned into absent signals by the detector.
///
/// # Example
///
/// ```rust
/// use install_deps::{DetectionError, HostProbe, LsbField};
/// use std::path::PathBuf;
///
/// struct FreeBsdHost;
///
/// impl HostProbe for FreeBsdHost {
///     async fn kernel_name(&self) -> Result<String, DetectionError> {
///         Ok("FreeBSD".to_string())
///     }
///     async fn product_version(&self) -> Result<String, DetectionError> {
///         Err(DetectionError::NotFound)
///     }
///     async fn lsb_release(&self, _field: LsbField) -> Result<String, DetectionError> {
///         Err(DetectionError::NotFound)
///     }
///     fn arch_marker_exists(&self) -> bool {
///         false
///     }
///     fn os_release_name(&self) -> Result<String, DetectionError> {
///         Err(DetectionError::NotFound)
///     }
///     fn find_tool(&self, _name: &str) -> Option<PathBuf> {
///         None
///     }
///     fn is_privileged(&self) -> bool {
///         false
///     }
///     fn is_ci(&self) -> bool {
///         false
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait HostProbe {
    /// Kernel name as printed by `uname -s`.
    async fn kernel_name(&self) -> Result<String, DetectionError>;

    /// macOS product version as printed by `sw_vers -productVersion`.
    async fn product_version(&self) -> Result<String, DetectionError>;

    /// One field of `lsb_release`.
    async fn lsb_release(&self, field: LsbField) -> Result<String, DetectionError>;

    /// Whether the Arch Linux marker file exists.
    fn arch_marker_exists(&self) -> bool;

    /// `NAME` from the OS-release file.
    fn os_release_name(&self) -> Result<String, DetectionError>;

    /// Locate an executable.
    fn find_tool(&self, name: &str) -> Option<PathBuf>;

    /// Whether the effective user is root.
    fn is_privileged(&self) -> bool;

    /// Whether the CI environment variable is set and non-empty.
    fn is_ci(&self) -> bool;
}

/// [`HostProbe`] backed by the running system.
#[derive(Debug, Clone, Default)]
pub struct SystemProbe {
    options: HostOptions,
}

impl SystemProbe {
    /// Probe the system using the given paths and timeout.
    pub fn new(options: HostOptions) -> Self {
        Self { options }
    }

    /// The options this probe reads.
    pub fn options(&self) -> &HostOptions {
        &self.options
    }

    async fn run_tool(&self, tool: &str, args: &[&str]) -> Result<String, DetectionError> {
        let path = find_executable(tool).ok_or(DetectionError::NotFound)?;
        run_probe(&path, args, self.options.probe_timeout).await
    }
}

impl HostProbe for SystemProbe {
    async fn kernel_name(&self) -> Result<String, DetectionError> {
        self.run_tool("uname", &["-s"]).await
    }

    async fn product_version(&self) -> Result<String, DetectionError> {
        self.run_tool("sw_vers", &["-productVersion"]).await
    }

    async fn lsb_release(&self, field: LsbField) -> Result<String, DetectionError> {
        self.run_tool("lsb_release", &[field.flag()]).await
    }

    fn arch_marker_exists(&self) -> bool {
        self.options.arch_marker.exists()
    }

    fn os_release_name(&self) -> Result<String, DetectionError> {
        let contents = std::fs::read_to_string(&self.options.os_release)?;
        parse_os_release_name(&contents)
    }

    fn find_tool(&self, name: &str) -> Option<PathBuf> {
        find_executable(name)
    }

    fn is_privileged(&self) -> bool {
        nix::unistd::geteuid().is_root()
    }

    fn is_ci(&self) -> bool {
        std::env::var_os(&self.options.ci_env_var).is_some_and(|v| !v.is_empty())
    }
}
