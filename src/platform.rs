//! Supported platform identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// macOS releases dependencies can be installed on.
///
/// Anything outside this set resolves to an unsupported version.
///
/// # Example
///
/// ```rust
/// use install_deps::MacOsRelease;
///
/// assert_eq!(MacOsRelease::from_major_minor(10, 11), Some(MacOsRelease::ElCapitan));
/// assert_eq!(MacOsRelease::from_major_minor(10, 9), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum MacOsRelease {
    /// OS X 10.10
    Yosemite,
    /// OS X 10.11
    ElCapitan,
    /// macOS 10.12
    Sierra,
}

impl MacOsRelease {
    /// The `major.minor` pair this release reports.
    pub fn major_minor(&self) -> (u64, u64) {
        match self {
            Self::Yosemite => (10, 10),
            Self::ElCapitan => (10, 11),
            Self::Sierra => (10, 12),
        }
    }

    /// Marketing name of the release.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Yosemite => "Yosemite",
            Self::ElCapitan => "El Capitan",
            Self::Sierra => "Sierra",
        }
    }

    /// Look up a release by exact `major.minor`.
    pub fn from_major_minor(major: u64, minor: u64) -> Option<Self> {
        Self::all().find(|r| r.major_minor() == (major, minor))
    }

    /// Iterator over all supported releases, oldest first.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Comma-separated `major.minor` list for error messages.
    pub fn supported_list() -> String {
        Self::all()
            .map(|r| {
                let (major, minor) = r.major_minor();
                format!("{}.{}", major, minor)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Ubuntu codenames with a known install recipe.
///
/// Parsing is exact and case-sensitive: `lsb_release -cs` prints lowercase
/// codenames, and anything else is an unsupported version.
///
/// # Example
///
/// ```rust
/// use install_deps::UbuntuCodename;
/// use std::str::FromStr;
///
/// assert_eq!(UbuntuCodename::from_str("xenial").unwrap(), UbuntuCodename::Xenial);
/// assert!(UbuntuCodename::from_str("Xenial").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UbuntuCodename {
    /// 14.04
    Trusty,
    /// 14.10
    Utopic,
    /// 15.04
    Vivid,
    /// 15.10
    Wily,
    /// 16.04
    Xenial,
    /// 16.10
    Yakkety,
}

impl UbuntuCodename {
    /// Release number for display.
    pub fn release(&self) -> &'static str {
        match self {
            Self::Trusty => "14.04",
            Self::Utopic => "14.10",
            Self::Vivid => "15.04",
            Self::Wily => "15.10",
            Self::Xenial => "16.04",
            Self::Yakkety => "16.10",
        }
    }

    /// Comma-separated codename list for error messages.
    pub fn supported_list() -> String {
        <Self as IntoEnumIterator>::iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The platform branch a plan was resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "snake_case")]
pub enum Platform {
    /// macOS with Homebrew.
    MacOs {
        /// The matched release.
        release: MacOsRelease,
    },
    /// Arch Linux with pacman.
    Arch,
    /// Debian with apt.
    Debian,
    /// Fedora with dnf.
    Fedora,
    /// Ubuntu or Linux Mint with apt.
    Ubuntu {
        /// The matched codename.
        codename: UbuntuCodename,
    },
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MacOs { release } => {
                let (major, minor) = release.major_minor();
                write!(f, "macOS {} ({}.{})", release.display_name(), major, minor)
            }
            Self::Arch => write!(f, "Arch Linux"),
            Self::Debian => write!(f, "Debian"),
            Self::Fedora => write!(f, "Fedora"),
            Self::Ubuntu { codename } => write!(f, "Ubuntu {} ({})", codename, codename.release()),
        }
    }
}
