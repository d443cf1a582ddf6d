//! Build-time provisioning of the rclone sidecar binary.
//!
//! Packaged desktop builds bundle rclone as a sidecar executable named after
//! the packaging target triple. This crate guarantees that binary exists in
//! the packaging binaries directory, downloading and unpacking the pinned
//! upstream release if it is absent. Re-runs are cheap: an existing binary
//! short-circuits before any network work.

mod download;
mod error;
mod extract;
mod platform;
mod provision;

pub use error::{ProvisionError, Result};
pub use extract::{host_extractor, Extractor, PowershellExtractor, UnzipExtractor};
pub use platform::{detect_host, resolve_host, target_triple, HostArch, HostPlatform};
pub use provision::{provision, Outcome};

use std::path::PathBuf;

/// Upstream rclone release pinned for sidecar builds.
pub const RCLONE_VERSION: &str = "1.66.0";

/// Upstream download host.
pub const DOWNLOAD_BASE_URL: &str = "https://downloads.rclone.org";

/// Configuration for one provisioning run.
pub struct ProvisionConfig {
    /// Platform the sidecar is provisioned for.
    pub platform: HostPlatform,
    /// Architecture the sidecar is provisioned for.
    pub arch: HostArch,
    /// Pinned upstream version (e.g. `"1.66.0"`).
    pub version: String,
    /// Download host, normally [`DOWNLOAD_BASE_URL`]. Tests point this at a
    /// local HTTP server.
    pub base_url: String,
    /// Output directory the final binary lands in.
    pub binaries_dir: PathBuf,
}

impl ProvisionConfig {
    /// Build a config for the running host.
    pub fn detect(binaries_dir: impl Into<PathBuf>) -> Result<Self> {
        let (platform, arch) = detect_host()?;
        Ok(Self::for_host(platform, arch, binaries_dir))
    }

    /// Build a config for an explicit platform/arch pair. Tests use this to
    /// exercise non-host layouts; [`ProvisionConfig::detect`] is the
    /// production path.
    pub fn for_host(
        platform: HostPlatform,
        arch: HostArch,
        binaries_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            platform,
            arch,
            version: RCLONE_VERSION.to_string(),
            base_url: DOWNLOAD_BASE_URL.to_string(),
            binaries_dir: binaries_dir.into(),
        }
    }

    /// The packaging target triple for this config.
    pub fn target_triple(&self) -> &'static str {
        target_triple(self.platform, self.arch)
    }

    /// Final sidecar file name: `rclone-<triple>`, `.exe`-suffixed on Windows.
    pub fn binary_name(&self) -> String {
        let suffix = if self.platform.is_windows() { ".exe" } else { "" };
        format!("rclone-{}{}", self.target_triple(), suffix)
    }

    /// Final sidecar path inside the binaries directory.
    pub fn binary_path(&self) -> PathBuf {
        self.binaries_dir.join(self.binary_name())
    }

    /// Upstream archive stem, also the name of the nested extraction folder:
    /// `rclone-v<version>-<platform>-<arch>`.
    pub fn archive_stem(&self) -> String {
        format!(
            "rclone-v{}-{}-{}",
            self.version,
            self.platform.release_token(),
            self.arch.release_token()
        )
    }

    /// Full download URL for the release archive.
    pub fn archive_url(&self) -> String {
        format!(
            "{}/v{}/{}.zip",
            self.base_url,
            self.version,
            self.archive_stem()
        )
    }

    /// Transient path the downloaded archive is written to.
    pub fn archive_path(&self) -> PathBuf {
        self.binaries_dir.join("rclone.zip")
    }

    /// Name of the executable inside the upstream archive.
    pub fn member_name(&self) -> &'static str {
        if self.platform.is_windows() {
            "rclone.exe"
        } else {
            "rclone"
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
