//! Platform detection functions.

use crate::detection::{HostProbe, LsbField, SystemProbe};
use crate::{DetectionError, DistroSignal, HostOptions, PlatformSignal};
use tracing::debug;

/// Detect the host platform with default options.
///
/// # Example
///
/// ```rust,no_run
/// use install_deps::detect;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let signal = detect().await;
///     println!("kernel: {:?}", signal.kernel_name);
/// }
/// ```
pub async fn detect() -> PlatformSignal {
    detect_with_options(&HostOptions::default()).await
}

/// Detect the host platform using custom paths and timeout.
pub async fn detect_with_options(options: &HostOptions) -> PlatformSignal {
    detect_with_probe(&SystemProbe::new(options.clone())).await
}

/// Gather a [`PlatformSignal`] from `probe`.
///
/// Signal sources are queried in a fixed priority order:
///
/// 1. Kernel name; nothing else is queried for kernels other than Darwin
///    and Linux
/// 2. Darwin: product version and Homebrew presence
/// 3. Linux: the Arch marker file, which short-circuits the remaining
///    distro sources
/// 4. Linux: the OS-release `NAME`
/// 5. Linux: `lsb_release` id, then codename and release if the id was found
///
/// Principal identity and the CI flag are read for every host.
///
/// This never fails. A probe that errors leaves its field absent.
pub async fn detect_with_probe<P: HostProbe>(probe: &P) -> PlatformSignal {
    let mut signal = PlatformSignal {
        privileged: probe.is_privileged(),
        ci: probe.is_ci(),
        ..Default::default()
    };

    let Some(kernel) = found("kernel name", probe.kernel_name().await) else {
        return signal;
    };
    debug!(kernel = %kernel, "Detected kernel");

    match kernel.as_str() {
        "Darwin" => {
            signal.version = found("macOS product version", probe.product_version().await);
            signal.homebrew_present = probe.find_tool("brew").is_some();
            debug!(
                version = ?signal.version,
                homebrew = signal.homebrew_present,
                "Detected macOS"
            );
        }
        "Linux" => detect_linux(probe, &mut signal).await,
        _ => {}
    }

    signal.kernel_name = Some(kernel);
    signal
}

async fn detect_linux<P: HostProbe>(probe: &P, signal: &mut PlatformSignal) {
    if probe.arch_marker_exists() {
        debug!("Arch marker file present");
        signal.distro = Some(DistroSignal::ArchMarker);
        return;
    }

    let os_release = found("OS-release NAME", probe.os_release_name());
    let lsb_id = found("lsb_release id", probe.lsb_release(LsbField::Id).await);
    if lsb_id.is_some() {
        signal.codename = found(
            "lsb_release codename",
            probe.lsb_release(LsbField::Codename).await,
        );
        signal.version = found(
            "lsb_release release",
            probe.lsb_release(LsbField::Release).await,
        );
    }

    signal.distro = match (os_release, lsb_id) {
        (Some(name), lsb_id) => Some(DistroSignal::OsRelease { name, lsb_id }),
        (None, Some(id)) => Some(DistroSignal::LsbRelease { id }),
        (None, None) => None,
    };
    debug!(distro = ?signal.distro, codename = ?signal.codename, "Detected Linux distribution");
}

fn found(what: &str, result: Result<String, DetectionError>) -> Option<String> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(signal = what, error = e.description(), "Signal unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Scripted host that records which sources were queried.
    #[derive(Default)]
    struct MockProbe {
        kernel: Option<&'static str>,
        product_version: Option<&'static str>,
        arch_marker: bool,
        os_release: Option<&'static str>,
        lsb_id: Option<&'static str>,
        lsb_codename: Option<&'static str>,
        lsb_release: Option<&'static str>,
        tools: Vec<&'static str>,
        privileged: bool,
        ci: bool,
        queried: RefCell<Vec<&'static str>>,
    }

    fn answer(value: Option<&'static str>) -> Result<String, DetectionError> {
        value.map(str::to_string).ok_or(DetectionError::NotFound)
    }

    impl HostProbe for MockProbe {
        async fn kernel_name(&self) -> Result<String, DetectionError> {
            self.queried.borrow_mut().push("kernel");
            answer(self.kernel)
        }

        async fn product_version(&self) -> Result<String, DetectionError> {
            self.queried.borrow_mut().push("sw_vers");
            answer(self.product_version)
        }

        async fn lsb_release(&self, field: LsbField) -> Result<String, DetectionError> {
            self.queried.borrow_mut().push("lsb_release");
            match field {
                LsbField::Id => answer(self.lsb_id),
                LsbField::Codename => answer(self.lsb_codename),
                LsbField::Release => answer(self.lsb_release),
            }
        }

        fn arch_marker_exists(&self) -> bool {
            self.queried.borrow_mut().push("marker");
            self.arch_marker
        }

        fn os_release_name(&self) -> Result<String, DetectionError> {
            self.queried.borrow_mut().push("os-release");
            answer(self.os_release)
        }

        fn find_tool(&self, name: &str) -> Option<PathBuf> {
            self.tools
                .iter()
                .find(|t| **t == name)
                .map(|t| PathBuf::from("/usr/local/bin").join(t))
        }

        fn is_privileged(&self) -> bool {
            self.privileged
        }

        fn is_ci(&self) -> bool {
            self.ci
        }
    }

    #[tokio::test]
    async fn test_all_sources_unavailable() {
        let probe = MockProbe::default();
        let signal = detect_with_probe(&probe).await;
        assert_eq!(signal, PlatformSignal::default());
    }

    #[tokio::test]
    async fn test_darwin_signals() {
        let probe = MockProbe {
            kernel: Some("Darwin"),
            product_version: Some("10.12.6"),
            tools: vec!["brew"],
            ..Default::default()
        };
        let signal = detect_with_probe(&probe).await;
        assert_eq!(signal.kernel_name.as_deref(), Some("Darwin"));
        assert_eq!(signal.version.as_deref(), Some("10.12.6"));
        assert!(signal.homebrew_present);
        assert!(signal.distro.is_none());
        assert!(!probe.queried.borrow().contains(&"marker"));
    }

    #[tokio::test]
    async fn test_arch_marker_short_circuits() {
        let probe = MockProbe {
            kernel: Some("Linux"),
            arch_marker: true,
            os_release: Some("Debian GNU/Linux"),
            lsb_id: Some("Ubuntu"),
            ..Default::default()
        };
        let signal = detect_with_probe(&probe).await;
        assert_eq!(signal.distro, Some(DistroSignal::ArchMarker));
        let queried = probe.queried.borrow();
        assert!(!queried.contains(&"os-release"));
        assert!(!queried.contains(&"lsb_release"));
    }

    #[tokio::test]
    async fn test_os_release_with_lsb() {
        let probe = MockProbe {
            kernel: Some("Linux"),
            os_release: Some("Ubuntu"),
            lsb_id: Some("Ubuntu"),
            lsb_codename: Some("xenial"),
            lsb_release: Some("16.04"),
            ..Default::default()
        };
        let signal = detect_with_probe(&probe).await;
        assert_eq!(
            signal.distro,
            Some(DistroSignal::OsRelease {
                name: "Ubuntu".to_string(),
                lsb_id: Some("Ubuntu".to_string()),
            })
        );
        assert_eq!(signal.codename.as_deref(), Some("xenial"));
        assert_eq!(signal.version.as_deref(), Some("16.04"));
    }

    #[tokio::test]
    async fn test_lsb_fallback_without_os_release() {
        let probe = MockProbe {
            kernel: Some("Linux"),
            lsb_id: Some("LinuxMint"),
            lsb_codename: Some("rosa"),
            ..Default::default()
        };
        let signal = detect_with_probe(&probe).await;
        assert_eq!(
            signal.distro,
            Some(DistroSignal::LsbRelease {
                id: "LinuxMint".to_string()
            })
        );
        assert_eq!(signal.codename.as_deref(), Some("rosa"));
        assert!(signal.version.is_none());
    }

    #[tokio::test]
    async fn test_codename_not_queried_without_id() {
        let probe = MockProbe {
            kernel: Some("Linux"),
            os_release: Some("Fedora"),
            lsb_codename: Some("ignored"),
            ..Default::default()
        };
        let signal = detect_with_probe(&probe).await;
        assert!(signal.codename.is_none());
        let lsb_calls = probe
            .queried
            .borrow()
            .iter()
            .filter(|q| **q == "lsb_release")
            .count();
        assert_eq!(lsb_calls, 1);
    }

    #[tokio::test]
    async fn test_other_kernel_queries_nothing_else() {
        let probe = MockProbe {
            kernel: Some("FreeBSD"),
            privileged: true,
            ci: true,
            ..Default::default()
        };
        let signal = detect_with_probe(&probe).await;
        assert_eq!(signal.kernel_name.as_deref(), Some("FreeBSD"));
        assert!(signal.privileged);
        assert!(signal.ci);
        assert_eq!(*probe.queried.borrow(), vec!["kernel"]);
    }
}
