//! Host platform detection and the static naming tables.
//!
//! Two fixed mappings live here: host OS/arch to the upstream rclone release
//! tokens, and host OS/arch to the packaging target triple. Both are
//! exhaustive matches over the enums, so adding a platform variant fails to
//! compile until every table is extended.

use crate::error::{ProvisionError, Result};

/// Operating systems a sidecar is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Mac,
    Linux,
    Windows,
}

/// CPU architectures a sidecar is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostArch {
    Arm64,
    X64,
}

impl HostPlatform {
    /// Map a `std::env::consts::OS` identifier, if recognized.
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "macos" => Some(HostPlatform::Mac),
            "linux" => Some(HostPlatform::Linux),
            "windows" => Some(HostPlatform::Windows),
            _ => None,
        }
    }

    /// The platform token used in upstream rclone release file names.
    pub fn release_token(self) -> &'static str {
        match self {
            HostPlatform::Mac => "osx",
            HostPlatform::Linux => "linux",
            HostPlatform::Windows => "windows",
        }
    }

    pub fn is_windows(self) -> bool {
        self == HostPlatform::Windows
    }
}

impl HostArch {
    /// Map a `std::env::consts::ARCH` identifier, if recognized.
    pub fn from_arch(arch: &str) -> Option<Self> {
        match arch {
            "aarch64" => Some(HostArch::Arm64),
            "x86_64" => Some(HostArch::X64),
            _ => None,
        }
    }

    /// The architecture token used in upstream rclone release file names.
    pub fn release_token(self) -> &'static str {
        match self {
            HostArch::Arm64 => "arm64",
            HostArch::X64 => "amd64",
        }
    }
}

/// Resolve raw OS/arch identifiers against the mapping tables.
///
/// Fails with [`ProvisionError::UnsupportedPlatform`] naming the rejected
/// combination; no I/O has happened by then.
pub fn resolve_host(os: &str, arch: &str) -> Result<(HostPlatform, HostArch)> {
    match (HostPlatform::from_os(os), HostArch::from_arch(arch)) {
        (Some(platform), Some(arch)) => Ok((platform, arch)),
        _ => Err(ProvisionError::UnsupportedPlatform {
            os: os.to_string(),
            arch: arch.to_string(),
        }),
    }
}

/// Detect the platform/arch pair of the running host.
pub fn detect_host() -> Result<(HostPlatform, HostArch)> {
    resolve_host(std::env::consts::OS, std::env::consts::ARCH)
}

/// The packaging target triple for a platform/arch pair.
pub fn target_triple(platform: HostPlatform, arch: HostArch) -> &'static str {
    match (platform, arch) {
        (HostPlatform::Mac, HostArch::Arm64) => "aarch64-apple-darwin",
        (HostPlatform::Mac, HostArch::X64) => "x86_64-apple-darwin",
        (HostPlatform::Windows, HostArch::Arm64) => "aarch64-pc-windows-msvc",
        (HostPlatform::Windows, HostArch::X64) => "x86_64-pc-windows-msvc",
        (HostPlatform::Linux, HostArch::Arm64) => "aarch64-unknown-linux-gnu",
        (HostPlatform::Linux, HostArch::X64) => "x86_64-unknown-linux-gnu",
    }
}
