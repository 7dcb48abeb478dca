//! Native package managers the installer drives.

use crate::{InstallLocation, StructuredCommand};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A native package manager.
///
/// Each variant knows how to spell its refresh, install and remove
/// invocations. Install and remove are always non-interactive; nothing ever
/// asks a manager to skip signature verification.
///
/// # Example
///
/// ```rust
/// use install_deps::PackageManager;
///
/// for manager in PackageManager::all() {
///     println!("{}: {}", manager.display_name(), manager.executable_name());
/// }
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// Homebrew (macOS)
    Homebrew,
    /// pacman (Arch Linux)
    Pacman,
    /// apt-get (Debian, Ubuntu, Linux Mint)
    Apt,
    /// dnf (Fedora)
    Dnf,
}

impl PackageManager {
    /// The executable name to search for in PATH.
    ///
    /// # Example
    ///
    /// ```rust
    /// use install_deps::PackageManager;
    ///
    /// assert_eq!(PackageManager::Homebrew.executable_name(), "brew");
    /// assert_eq!(PackageManager::Apt.executable_name(), "apt-get");
    /// ```
    pub fn executable_name(&self) -> &'static str {
        match self {
            Self::Homebrew => "brew",
            Self::Pacman => "pacman",
            Self::Apt => "apt-get",
            Self::Dnf => "dnf",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Homebrew => "Homebrew",
            Self::Pacman => "pacman",
            Self::Apt => "apt",
            Self::Dnf => "dnf",
        }
    }

    /// Where this manager writes.
    pub fn location(&self) -> InstallLocation {
        match self {
            Self::Homebrew => InstallLocation::UserLocal,
            Self::Pacman | Self::Apt | Self::Dnf => InstallLocation::System,
        }
    }

    /// Index refresh command, if the manager has a separate one.
    ///
    /// dnf refreshes stale metadata on its own during install.
    pub fn refresh_command(&self) -> Option<StructuredCommand> {
        let program = self.executable_name();
        match self {
            Self::Homebrew => Some(StructuredCommand::new(program, ["update"])),
            Self::Pacman => Some(StructuredCommand::new(program, ["-Sy"])),
            Self::Apt => Some(StructuredCommand::new(program, ["update"])),
            Self::Dnf => None,
        }
    }

    /// Batch install command for `packages`.
    pub fn install_command(&self, packages: &[String]) -> StructuredCommand {
        let base: &[&str] = match self {
            Self::Homebrew => &["install"],
            Self::Pacman => &["-S", "--noconfirm", "--needed"],
            Self::Apt => &["-y", "install"],
            Self::Dnf => &["-y", "install"],
        };
        self.command_with(base, packages)
    }

    /// Batch remove command for `packages`.
    pub fn remove_command(&self, packages: &[String]) -> StructuredCommand {
        let base: &[&str] = match self {
            Self::Homebrew => &["uninstall"],
            Self::Pacman => &["-R", "--noconfirm"],
            Self::Apt => &["-y", "remove"],
            Self::Dnf => &["-y", "remove"],
        };
        self.command_with(base, packages)
    }

    fn command_with(&self, base: &[&str], packages: &[String]) -> StructuredCommand {
        let args = base
            .iter()
            .map(|s| s.to_string())
            .chain(packages.iter().cloned());
        StructuredCommand::new(self.executable_name(), args)
    }

    /// Iterator over all known managers.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
