//! Host configuration options.
//!
//! This module provides the [`HostOptions`] struct that tells the detector
//! where to look for signal sources and the dispatcher where to write.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for detection and resolution.
///
/// The defaults point at the real system locations. Tests and the CLI
/// override individual fields to run against fixture files.
///
/// # Example
///
/// ```rust
/// use install_deps::HostOptions;
/// use std::path::PathBuf;
///
/// let opts = HostOptions {
///     os_release: PathBuf::from("/tmp/os-release"),
///     ..Default::default()
/// };
/// assert_eq!(opts.arch_marker, PathBuf::from("/etc/arch-release"));
/// ```
#[derive(Debug, Clone)]
pub struct HostOptions {
    /// Marker file whose existence identifies Arch Linux.
    ///
    /// Default: `/etc/arch-release`
    pub arch_marker: PathBuf,

    /// OS-release metadata file.
    ///
    /// Default: `/etc/os-release`
    pub os_release: PathBuf,

    /// apt source list that toolchain lines are appended to.
    ///
    /// Default: `/etc/apt/sources.list`
    pub apt_sources: PathBuf,

    /// Environment variable whose presence marks a CI run.
    ///
    /// Default: `TRAVIS`
    pub ci_env_var: String,

    /// Timeout for each probe command (`uname`, `sw_vers`, `lsb_release`).
    ///
    /// Default: 5 seconds
    pub probe_timeout: Duration,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            arch_marker: PathBuf::from("/etc/arch-release"),
            os_release: PathBuf::from("/etc/os-release"),
            apt_sources: PathBuf::from("/etc/apt/sources.list"),
            ci_env_var: "TRAVIS".to_string(),
            probe_timeout: Duration::from_secs(5),
        }
    }
}
