//! Install plans and their execution.
//!
//! A plan is produced by [`resolve`](crate::resolve), checked by
//! [`can_install`](crate::can_install) and run by [`install`](crate::install).
//!
//! # Example
//!
//! ```rust
//! use install_deps::{resolve, DistroSignal, PlatformSignal};
//!
//! let signal = PlatformSignal {
//!     kernel_name: Some("Linux".to_string()),
//!     distro: Some(DistroSignal::LsbRelease { id: "Ubuntu".to_string() }),
//!     codename: Some("xenial".to_string()),
//!     ..Default::default()
//! };
//! let plan = resolve(&signal).unwrap();
//! println!("Installing on {}:", plan.platform);
//! for command in plan.commands() {
//!     println!("  {}", command.raw_command());
//! }
//! ```

pub(crate) mod catalog;
mod errors;
mod executor;
mod prereq;
mod progress;
mod types;

pub use catalog::{TRUSTY_TOOLCHAIN_SOURCE, VIVID_LLVM_SOURCE};
pub use errors::InstallError;
pub use executor::install;
pub use prereq::{can_detect, can_install};
pub use progress::{InstallOptions, InstallProgress};
pub use types::{
    Elevation, InstallLocation, InstallPlan, Step, StructuredCommand, ELEVATION_PROGRAM,
};
