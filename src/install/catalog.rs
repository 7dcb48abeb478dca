//! Package lists and source lines for each supported platform.
//!
//! This module is inert data: every function returns the plan for one
//! platform branch with elevation left to the caller.

use super::{Elevation, InstallPlan, Step};
use crate::{MacOsRelease, PackageManager, Platform, UbuntuCodename};
use std::path::Path;

/// Source line for the Ubuntu toolchain test PPA on trusty.
pub const TRUSTY_TOOLCHAIN_SOURCE: &str =
    "deb http://ppa.launchpad.net/ubuntu-toolchain-r/test/ubuntu trusty main";

/// Source line for the LLVM 3.7 toolchain on vivid.
pub const VIVID_LLVM_SOURCE: &str = "deb http://llvm.org/apt/vivid/ llvm-toolchain-vivid-3.7 main";

/// Packages preinstalled on trusty CI workers that block the toolchain upgrade.
const TRUSTY_CI_CONFLICTS: &[&str] = &["cmake", "cmake-data"];

const HOMEBREW_PACKAGES: &[&str] = &[
    "boost",
    "cmake",
    "cryptopp",
    "gmp",
    "jsoncpp",
    "leveldb",
    "libmicrohttpd",
    "miniupnpc",
];

const PACMAN_PACKAGES: &[&str] = &[
    "base-devel",
    "boost",
    "cmake",
    "crypto++",
    "curl",
    "git",
    "gmp",
    "jsoncpp",
    "leveldb",
    "libmicrohttpd",
    "miniupnpc",
    "openssl",
];

const DEBIAN_PACKAGES: &[&str] = &[
    "build-essential",
    "cmake",
    "g++",
    "gcc",
    "git",
    "libboost-all-dev",
    "libcurl4-openssl-dev",
    "libgmp-dev",
    "libjsoncpp-dev",
    "libleveldb-dev",
    "libmicrohttpd-dev",
    "libminiupnpc-dev",
    "libssl-dev",
    "unzip",
];

const FEDORA_PACKAGES: &[&str] = &[
    "autoconf",
    "automake",
    "boost-devel",
    "cmake",
    "gcc",
    "gcc-c++",
    "git",
    "gmp-devel",
    "jsoncpp-devel",
    "leveldb-devel",
    "libcurl-devel",
    "libmicrohttpd-devel",
    "libtool",
    "miniupnpc-devel",
    "openssl-devel",
];

const UBUNTU_PACKAGES: &[&str] = &[
    "build-essential",
    "cmake",
    "git",
    "libboost-all-dev",
    "libcurl4-openssl-dev",
    "libgmp-dev",
    "libjsoncpp-dev",
    "libleveldb-dev",
    "libmicrohttpd-dev",
    "libminiupnpc-dev",
    "libssl-dev",
];

fn package_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn plan(platform: Platform, manager: PackageManager, packages: &[&str]) -> InstallPlan {
    InstallPlan {
        platform,
        manager,
        packages: package_list(packages),
        extra_steps: vec![],
        elevation: Elevation::None,
    }
}

/// macOS plan, installed with Homebrew.
pub(crate) fn macos_plan(release: MacOsRelease) -> InstallPlan {
    plan(
        Platform::MacOs { release },
        PackageManager::Homebrew,
        HOMEBREW_PACKAGES,
    )
}

/// Arch Linux plan.
pub(crate) fn arch_plan() -> InstallPlan {
    plan(Platform::Arch, PackageManager::Pacman, PACMAN_PACKAGES)
}

/// Debian plan.
pub(crate) fn debian_plan() -> InstallPlan {
    plan(Platform::Debian, PackageManager::Apt, DEBIAN_PACKAGES)
}

/// Fedora plan.
pub(crate) fn fedora_plan() -> InstallPlan {
    plan(Platform::Fedora, PackageManager::Dnf, FEDORA_PACKAGES)
}

/// Ubuntu / Linux Mint plan for `codename`.
///
/// - trusty: toolchain PPA line; on CI the conflicting preinstalled
///   packages are removed first
/// - vivid: LLVM toolchain line
/// - utopic, wily, xenial, yakkety: common list only
pub(crate) fn ubuntu_plan(codename: UbuntuCodename, ci: bool, apt_sources: &Path) -> InstallPlan {
    let mut plan = plan(
        Platform::Ubuntu { codename },
        PackageManager::Apt,
        UBUNTU_PACKAGES,
    );

    let append = |line: &str| Step::AppendSourceLine {
        path: apt_sources.to_path_buf(),
        line: line.to_string(),
    };

    match codename {
        UbuntuCodename::Trusty => {
            plan.extra_steps.push(append(TRUSTY_TOOLCHAIN_SOURCE));
            if ci {
                plan.extra_steps.push(Step::RemovePackages {
                    manager: PackageManager::Apt,
                    packages: package_list(TRUSTY_CI_CONFLICTS),
                });
            }
        }
        UbuntuCodename::Vivid => plan.extra_steps.push(append(VIVID_LLVM_SOURCE)),
        UbuntuCodename::Utopic
        | UbuntuCodename::Wily
        | UbuntuCodename::Xenial
        | UbuntuCodename::Yakkety => {}
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sources() -> PathBuf {
        PathBuf::from("/etc/apt/sources.list")
    }

    fn source_lines(plan: &InstallPlan) -> Vec<&str> {
        plan.extra_steps
            .iter()
            .filter_map(|s| match s {
                Step::AppendSourceLine { line, .. } => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_trusty_appends_toolchain() {
        let plan = ubuntu_plan(UbuntuCodename::Trusty, false, &sources());
        assert_eq!(source_lines(&plan), vec![TRUSTY_TOOLCHAIN_SOURCE]);
        assert!(TRUSTY_TOOLCHAIN_SOURCE.contains("ubuntu-toolchain-r"));
        assert!(TRUSTY_TOOLCHAIN_SOURCE.contains("trusty"));
    }

    #[test]
    fn test_trusty_ci_removes_conflicts_after_append() {
        let plan = ubuntu_plan(UbuntuCodename::Trusty, true, &sources());
        assert_eq!(plan.extra_steps.len(), 2);
        assert!(matches!(plan.extra_steps[0], Step::AppendSourceLine { .. }));
        assert!(matches!(plan.extra_steps[1], Step::RemovePackages { .. }));
    }

    #[test]
    fn test_trusty_outside_ci_skips_removal() {
        let plan = ubuntu_plan(UbuntuCodename::Trusty, false, &sources());
        assert!(!plan
            .extra_steps
            .iter()
            .any(|s| matches!(s, Step::RemovePackages { .. })));
    }

    #[test]
    fn test_vivid_appends_llvm() {
        let plan = ubuntu_plan(UbuntuCodename::Vivid, false, &sources());
        assert_eq!(source_lines(&plan), vec![VIVID_LLVM_SOURCE]);
    }

    #[test]
    fn test_other_codenames_have_no_extra_steps() {
        for codename in [
            UbuntuCodename::Utopic,
            UbuntuCodename::Wily,
            UbuntuCodename::Xenial,
            UbuntuCodename::Yakkety,
        ] {
            let plan = ubuntu_plan(codename, true, &sources());
            assert!(plan.extra_steps.is_empty(), "{}", codename);
        }
    }

    #[test]
    fn test_append_uses_configured_path() {
        let path = PathBuf::from("/tmp/sources.list");
        let plan = ubuntu_plan(UbuntuCodename::Trusty, false, &path);
        match &plan.extra_steps[0] {
            Step::AppendSourceLine { path: p, .. } => assert_eq!(p, &path),
            other => panic!("unexpected step: {:?}", other),
        }
    }

    #[test]
    fn test_managers_per_platform() {
        assert_eq!(
            macos_plan(MacOsRelease::Sierra).manager,
            PackageManager::Homebrew
        );
        assert_eq!(arch_plan().manager, PackageManager::Pacman);
        assert_eq!(debian_plan().manager, PackageManager::Apt);
        assert_eq!(fedora_plan().manager, PackageManager::Dnf);
    }

    #[test]
    fn test_package_lists_not_empty() {
        for plan in [
            macos_plan(MacOsRelease::Yosemite),
            arch_plan(),
            debian_plan(),
            fedora_plan(),
            ubuntu_plan(UbuntuCodename::Xenial, false, &sources()),
        ] {
            assert!(!plan.packages.is_empty(), "{}", plan.platform);
            assert!(plan.packages.iter().any(|p| p == "cmake"));
        }
    }
}
