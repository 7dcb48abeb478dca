//! PATH-based executable lookup with fallback locations.

use std::path::PathBuf;

/// System locations checked if the executable is not found in PATH.
///
/// Homebrew lives in `/usr/local/bin` on Intel Macs and `/opt/homebrew/bin`
/// on Apple Silicon; `sudo` shells often drop the `sbin` directories.
const FALLBACK_PATHS: &[&str] = &[
    "/usr/local/bin",
    "/opt/homebrew/bin",
    "/usr/bin",
    "/bin",
    "/usr/sbin",
    "/sbin",
];

/// Find an executable by name.
///
/// This first tries the system PATH via the `which` crate, then the fallback
/// locations above.
///
/// # Returns
///
/// `Some(PathBuf)` if the executable is found, `None` otherwise.
pub(crate) fn find_executable(name: &str) -> Option<PathBuf> {
    if let Ok(path) = which::which(name) {
        return Some(path);
    }

    FALLBACK_PATHS
        .iter()
        .map(|dir| PathBuf::from(dir).join(name))
        .find(|path| path.is_file())
}
