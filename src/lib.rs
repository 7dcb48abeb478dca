//! # install-deps
//!
//! Build-dependency installer for macOS (Homebrew), Arch Linux (pacman),
//! Debian and Ubuntu (apt-get) and Fedora (dnf).
//!
//! The crate is split into three stages that can be used independently:
//!
//! - `detect()` gathers a [`PlatformSignal`] from the host
//! - `resolve()` turns a signal into an [`InstallPlan`] or a typed [`InstallError`]
//! - `install()` runs the plan's commands in order and stops at the first failure
//!
//! Resolution is pure, so the whole decision procedure can be exercised from
//! a hand-built signal or a scripted [`HostProbe`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use install_deps::{detect, install, resolve, InstallOptions};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let signal = detect().await;
//!     match resolve(&signal) {
//!         Ok(plan) => {
//!             let result = install(&plan, InstallOptions::default(), |progress| {
//!                 println!("{}", progress.description());
//!             })
//!             .await;
//!             if let Err(e) = result {
//!                 eprintln!("{}\n{}", e, e.fix_suggestion());
//!             }
//!         }
//!         Err(e) => eprintln!("{}\n{}", e, e.fix_suggestion()),
//!     }
//! }
//! ```

mod detect;
mod detection;
mod install;
mod options;
mod package_manager;
mod platform;
mod resolve;
mod signal;

pub use detect::{detect, detect_with_options, detect_with_probe};
pub use detection::{HostProbe, LsbField, SystemProbe};
pub use install::{
    can_detect, can_install, install, Elevation, InstallError, InstallLocation, InstallOptions,
    InstallPlan, InstallProgress, Step, StructuredCommand, ELEVATION_PROGRAM,
    TRUSTY_TOOLCHAIN_SOURCE, VIVID_LLVM_SOURCE,
};
pub use options::HostOptions;
pub use package_manager::PackageManager;
pub use platform::{MacOsRelease, Platform, UbuntuCodename};
pub use resolve::{resolve, resolve_with_options};
pub use signal::{DetectionError, DistroSignal, PlatformSignal};
