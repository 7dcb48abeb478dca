//! Platform resolution: from detected signals to one install plan.
//!
//! Resolution is a pure function of the signal. The first matching branch
//! wins and every miss is a typed [`InstallError`].

use crate::detection::parse_release;
use crate::install::catalog;
use crate::{
    DistroSignal, Elevation, HostOptions, InstallError, InstallPlan, MacOsRelease,
    PlatformSignal, UbuntuCodename,
};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Resolve a signal to a plan with default options.
///
/// # Example
///
/// ```rust
/// use install_deps::{resolve, InstallError, PlatformSignal};
///
/// let signal = PlatformSignal {
///     kernel_name: Some("FreeBSD".to_string()),
///     ..Default::default()
/// };
/// assert!(matches!(
///     resolve(&signal),
///     Err(InstallError::UnsupportedPlatform { .. })
/// ));
/// ```
pub fn resolve(signal: &PlatformSignal) -> Result<InstallPlan, InstallError> {
    resolve_with_options(signal, &HostOptions::default())
}

/// Resolve a signal to a plan.
///
/// Decision procedure, first match wins:
///
/// 1. `Darwin`: release must be 10.10, 10.11 or 10.12, then Homebrew must
///    be present
/// 2. `FreeBSD`: not implemented
/// 3. `Linux`: Arch marker, then OS-release `NAME` prefixes `Debian` and
///    `Fedora`, then the `lsb_release` id
/// 4. anything else: unrecognized
///
/// The elevation policy is taken from the signal's principal and applied to
/// whichever plan matched.
pub fn resolve_with_options(
    signal: &PlatformSignal,
    options: &HostOptions,
) -> Result<InstallPlan, InstallError> {
    let mut plan = match signal.kernel_name.as_deref() {
        Some("Darwin") => resolve_darwin(signal)?,
        Some("FreeBSD") => return Err(InstallError::unsupported_platform("FreeBSD")),
        Some("Linux") => resolve_linux(signal, &options.apt_sources)?,
        Some(other) => {
            return Err(InstallError::unrecognized_platform(&format!(
                "unknown kernel {}",
                other
            )))
        }
        None => {
            return Err(InstallError::unrecognized_platform(
                "kernel name could not be determined",
            ))
        }
    };

    plan.elevation = Elevation::for_principal(signal.privileged);
    info!(
        platform = %plan.platform,
        manager = plan.manager.display_name(),
        packages = plan.packages.len(),
        elevation = ?plan.elevation,
        "Resolved install plan"
    );
    Ok(plan)
}

fn resolve_darwin(signal: &PlatformSignal) -> Result<InstallPlan, InstallError> {
    let raw = signal.version.as_deref().unwrap_or("unknown");
    let release = parse_release(raw)
        .ok()
        .and_then(|v| MacOsRelease::from_major_minor(v.major, v.minor))
        .ok_or_else(|| {
            InstallError::unsupported_version("macOS", raw, &MacOsRelease::supported_list())
        })?;

    if !signal.homebrew_present {
        return Err(InstallError::missing_tool("brew", Some("https://brew.sh")));
    }

    Ok(catalog::macos_plan(release))
}

fn resolve_linux(signal: &PlatformSignal, apt_sources: &Path) -> Result<InstallPlan, InstallError> {
    let distro = signal.distro.as_ref().ok_or_else(|| {
        InstallError::unrecognized_platform("Linux distribution could not be determined")
    })?;

    let lsb_id = match distro {
        DistroSignal::ArchMarker => return Ok(catalog::arch_plan()),
        DistroSignal::OsRelease { name, lsb_id } => {
            if name.starts_with("Debian") {
                return Ok(catalog::debian_plan());
            }
            if name.starts_with("Fedora") {
                return Ok(catalog::fedora_plan());
            }
            match lsb_id {
                Some(id) => id,
                None => {
                    return Err(InstallError::unrecognized_platform(&format!(
                        "Linux distribution {}",
                        name
                    )))
                }
            }
        }
        DistroSignal::LsbRelease { id } => id,
    };

    match lsb_id.as_str() {
        "Alpine" => Err(InstallError::unsupported_platform("Alpine")),
        "openSUSE" => Err(InstallError::unsupported_platform("openSUSE")),
        "Fedora" => Ok(catalog::fedora_plan()),
        "Ubuntu" | "LinuxMint" => {
            let raw = signal.codename.as_deref().unwrap_or("unknown");
            let codename = UbuntuCodename::from_str(raw).map_err(|_| {
                InstallError::unsupported_version(lsb_id, raw, &UbuntuCodename::supported_list())
            })?;
            Ok(catalog::ubuntu_plan(codename, signal.ci, apt_sources))
        }
        other => Err(InstallError::unrecognized_platform(&format!(
            "Linux distribution {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PackageManager, Platform, Step};
    use std::path::PathBuf;

    fn linux(distro: DistroSignal) -> PlatformSignal {
        PlatformSignal {
            kernel_name: Some("Linux".to_string()),
            distro: Some(distro),
            ..Default::default()
        }
    }

    fn ubuntu(codename: &str) -> PlatformSignal {
        PlatformSignal {
            codename: Some(codename.to_string()),
            ..linux(DistroSignal::LsbRelease {
                id: "Ubuntu".to_string(),
            })
        }
    }

    fn darwin(version: &str, homebrew: bool) -> PlatformSignal {
        PlatformSignal {
            kernel_name: Some("Darwin".to_string()),
            version: Some(version.to_string()),
            homebrew_present: homebrew,
            ..Default::default()
        }
    }

    #[test]
    fn test_darwin_supported_releases() {
        for (version, release) in [
            ("10.10.5", MacOsRelease::Yosemite),
            ("10.11", MacOsRelease::ElCapitan),
            ("10.12.6", MacOsRelease::Sierra),
        ] {
            let plan = resolve(&darwin(version, true)).unwrap();
            assert_eq!(plan.platform, Platform::MacOs { release });
            assert_eq!(plan.manager, PackageManager::Homebrew);
        }
    }

    #[test]
    fn test_darwin_unsupported_release() {
        for version in ["10.9.5", "10.13", "11.0", "garbage"] {
            match resolve(&darwin(version, true)) {
                Err(InstallError::UnsupportedVersion { platform, version: v, .. }) => {
                    assert_eq!(platform, "macOS");
                    assert_eq!(v, version);
                }
                other => panic!("Unexpected result for {}: {:?}", version, other),
            }
        }
    }

    #[test]
    fn test_darwin_version_checked_before_homebrew() {
        assert!(matches!(
            resolve(&darwin("10.8", false)),
            Err(InstallError::UnsupportedVersion { .. })
        ));
        assert!(matches!(
            resolve(&darwin("10.11", false)),
            Err(InstallError::MissingPrerequisiteTool { .. })
        ));
    }

    #[test]
    fn test_darwin_without_version() {
        let signal = PlatformSignal {
            kernel_name: Some("Darwin".to_string()),
            homebrew_present: true,
            ..Default::default()
        };
        assert!(matches!(
            resolve(&signal),
            Err(InstallError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_freebsd_unsupported() {
        let signal = PlatformSignal {
            kernel_name: Some("FreeBSD".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve(&signal),
            Err(InstallError::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn test_kernel_match_is_exact() {
        for kernel in ["linux", "darwin", "Linux ", "MINGW64_NT-10.0", "SunOS"] {
            let signal = PlatformSignal {
                kernel_name: Some(kernel.to_string()),
                distro: Some(DistroSignal::ArchMarker),
                ..Default::default()
            };
            assert!(
                matches!(
                    resolve(&signal),
                    Err(InstallError::UnrecognizedPlatform { .. })
                ),
                "{:?}",
                kernel
            );
        }
    }

    #[test]
    fn test_all_absent_is_unrecognized() {
        assert!(matches!(
            resolve(&PlatformSignal::default()),
            Err(InstallError::UnrecognizedPlatform { .. })
        ));
    }

    #[test]
    fn test_linux_without_distro_is_unrecognized() {
        let signal = PlatformSignal {
            kernel_name: Some("Linux".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve(&signal),
            Err(InstallError::UnrecognizedPlatform { .. })
        ));
    }

    #[test]
    fn test_os_release_prefix_match() {
        let plan = resolve(&linux(DistroSignal::OsRelease {
            name: "Debian GNU/Linux".to_string(),
            lsb_id: None,
        }))
        .unwrap();
        assert_eq!(plan.platform, Platform::Debian);

        let plan = resolve(&linux(DistroSignal::OsRelease {
            name: "Fedora".to_string(),
            lsb_id: None,
        }))
        .unwrap();
        assert_eq!(plan.platform, Platform::Fedora);
    }

    #[test]
    fn test_os_release_prefix_is_case_sensitive() {
        let result = resolve(&linux(DistroSignal::OsRelease {
            name: "debian".to_string(),
            lsb_id: None,
        }));
        assert!(matches!(
            result,
            Err(InstallError::UnrecognizedPlatform { .. })
        ));
    }

    #[test]
    fn test_os_release_beats_lsb() {
        let plan = resolve(&linux(DistroSignal::OsRelease {
            name: "Debian GNU/Linux".to_string(),
            lsb_id: Some("Ubuntu".to_string()),
        }))
        .unwrap();
        assert_eq!(plan.platform, Platform::Debian);
    }

    #[test]
    fn test_unhandled_os_release_defers_to_lsb() {
        let signal = PlatformSignal {
            codename: Some("xenial".to_string()),
            ..linux(DistroSignal::OsRelease {
                name: "Ubuntu".to_string(),
                lsb_id: Some("Ubuntu".to_string()),
            })
        };
        let plan = resolve(&signal).unwrap();
        assert_eq!(
            plan.platform,
            Platform::Ubuntu {
                codename: UbuntuCodename::Xenial
            }
        );
    }

    #[test]
    fn test_lsb_unsupported_distros() {
        for id in ["Alpine", "openSUSE"] {
            let result = resolve(&linux(DistroSignal::LsbRelease { id: id.to_string() }));
            match result {
                Err(InstallError::UnsupportedPlatform { platform, .. }) => assert_eq!(platform, id),
                other => panic!("Unexpected result for {}: {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_lsb_fedora() {
        let plan = resolve(&linux(DistroSignal::LsbRelease {
            id: "Fedora".to_string(),
        }))
        .unwrap();
        assert_eq!(plan.manager, PackageManager::Dnf);
    }

    #[test]
    fn test_lsb_unknown_id() {
        let result = resolve(&linux(DistroSignal::LsbRelease {
            id: "Gentoo".to_string(),
        }));
        assert!(matches!(
            result,
            Err(InstallError::UnrecognizedPlatform { .. })
        ));
    }

    #[test]
    fn test_linux_mint_uses_ubuntu_codenames() {
        let signal = PlatformSignal {
            codename: Some("trusty".to_string()),
            ..linux(DistroSignal::LsbRelease {
                id: "LinuxMint".to_string(),
            })
        };
        let plan = resolve(&signal).unwrap();
        assert_eq!(
            plan.platform,
            Platform::Ubuntu {
                codename: UbuntuCodename::Trusty
            }
        );

        let signal = PlatformSignal {
            codename: Some("rosa".to_string()),
            ..signal
        };
        match resolve(&signal) {
            Err(InstallError::UnsupportedVersion { platform, version, .. }) => {
                assert_eq!(platform, "LinuxMint");
                assert_eq!(version, "rosa");
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_ubuntu_unknown_codename() {
        assert!(matches!(
            resolve(&ubuntu("hypothetical")),
            Err(InstallError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_ubuntu_missing_codename() {
        let signal = linux(DistroSignal::LsbRelease {
            id: "Ubuntu".to_string(),
        });
        assert!(matches!(
            resolve(&signal),
            Err(InstallError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_apt_sources_from_options() {
        let options = HostOptions {
            apt_sources: PathBuf::from("/tmp/custom.list"),
            ..Default::default()
        };
        let plan = resolve_with_options(&ubuntu("vivid"), &options).unwrap();
        match &plan.extra_steps[0] {
            Step::AppendSourceLine { path, .. } => {
                assert_eq!(path, &PathBuf::from("/tmp/custom.list"))
            }
            other => panic!("Unexpected step: {:?}", other),
        }
    }

    #[test]
    fn test_elevation_follows_principal() {
        let mut signal = ubuntu("xenial");
        assert_eq!(resolve(&signal).unwrap().elevation, Elevation::Sudo);
        signal.privileged = true;
        assert_eq!(resolve(&signal).unwrap().elevation, Elevation::None);
    }

    #[test]
    fn test_fedora_is_elevated() {
        let plan = resolve(&linux(DistroSignal::OsRelease {
            name: "Fedora".to_string(),
            lsb_id: None,
        }))
        .unwrap();
        assert!(plan.commands().iter().all(|c| c.program == "sudo"));
    }
}
