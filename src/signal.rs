//! Platform signal types representing detection results.

use serde::{Deserialize, Serialize};

/// Where the Linux distribution identity came from.
///
/// The variants are listed in the priority order the detector uses: a marker
/// file beats OS-release metadata, which beats the release command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DistroSignal {
    /// The Arch Linux marker file exists.
    ArchMarker,

    /// `NAME` from the OS-release file.
    ///
    /// `lsb_id` carries the release command's id when it was also available,
    /// so a name the OS-release tier does not handle can defer to it.
    OsRelease {
        /// Value of the `NAME` key, unquoted.
        name: String,
        /// Output of `lsb_release -is`, if available.
        lsb_id: Option<String>,
    },

    /// Output of `lsb_release -is`.
    LsbRelease {
        /// Distributor id (e.g. "Ubuntu").
        id: String,
    },
}

impl DistroSignal {
    /// The release-command id, whichever tier carried it.
    pub fn lsb_id(&self) -> Option<&str> {
        match self {
            Self::ArchMarker => None,
            Self::OsRelease { lsb_id, .. } => lsb_id.as_deref(),
            Self::LsbRelease { id } => Some(id),
        }
    }
}

/// Raw facts gathered from the host.
///
/// Produced once per run by [`detect`](crate::detect) and never mutated. Every
/// field may be absent; an all-absent signal resolves to an unrecognized
/// platform rather than a detection failure.
///
/// # Example
///
/// ```rust
/// use install_deps::{resolve, PlatformSignal};
///
/// let signal = PlatformSignal {
///     kernel_name: Some("Plan9".to_string()),
///     ..Default::default()
/// };
/// assert!(resolve(&signal).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSignal {
    /// Output of `uname -s` (e.g. "Linux", "Darwin").
    pub kernel_name: Option<String>,

    /// Linux distribution identity, tagged with the tier that produced it.
    pub distro: Option<DistroSignal>,

    /// Distribution codename from `lsb_release -cs` (e.g. "xenial").
    pub codename: Option<String>,

    /// Version string: `sw_vers -productVersion` on macOS,
    /// `lsb_release -rs` on Linux.
    pub version: Option<String>,

    /// Whether Homebrew was found. Only probed on macOS.
    pub homebrew_present: bool,

    /// Whether the invoking principal is root.
    pub privileged: bool,

    /// Whether the run happens on a CI worker.
    pub ci: bool,
}

/// Typed error variants for failed signal probes.
///
/// Probe failures are never fatal: the detector logs them and records the
/// signal as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DetectionError {
    /// The probe command did not finish in time.
    Timeout,

    /// Permission denied running the probe or reading its input.
    PermissionDenied,

    /// The probe command or input file does not exist.
    NotFound,

    /// The probe produced no usable output.
    InvalidOutput,

    /// Any other I/O failure, including non-zero exit codes.
    IoError,
}

impl DetectionError {
    /// Human-readable description of the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use install_deps::DetectionError;
    ///
    /// assert_eq!(DetectionError::Timeout.description(), "Probe timed out");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::Timeout => "Probe timed out",
            Self::PermissionDenied => "Permission denied",
            Self::NotFound => "Not found",
            Self::InvalidOutput => "Probe produced no usable output",
            Self::IoError => "I/O error during probe",
        }
    }
}

impl From<std::io::Error> for DetectionError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::IoError,
        }
    }
}
