//! The provisioning step sequence.

use std::path::{Path, PathBuf};

use crate::download;
use crate::error::{ProvisionError, Result};
use crate::extract::Extractor;
use crate::ProvisionConfig;

/// What a provisioning run did.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The binary was already in place; no network or extraction work ran.
    AlreadyPresent(PathBuf),
    /// The binary was downloaded, extracted, and installed.
    Installed(PathBuf),
}

impl Outcome {
    /// The final sidecar binary path, whichever way the run went.
    pub fn path(&self) -> &Path {
        match self {
            Outcome::AlreadyPresent(p) | Outcome::Installed(p) => p,
        }
    }
}

/// Ensure the sidecar binary exists at its triple-qualified path.
///
/// Safe to call on every build: an existing binary short-circuits before any
/// network request. A fresh run downloads the pinned release archive, pulls
/// the executable out through `extractor`, renames it into place, removes
/// the transient archive and any nested extraction folder, and on non-Windows
/// targets marks the binary executable.
pub async fn provision(config: &ProvisionConfig, extractor: &dyn Extractor) -> Result<Outcome> {
    let binary_path = config.binary_path();

    if binary_path.exists() {
        tracing::debug!(path = %binary_path.display(), "sidecar already present");
        return Ok(Outcome::AlreadyPresent(binary_path));
    }

    tokio::fs::create_dir_all(&config.binaries_dir).await?;

    let url = config.archive_url();
    let archive_path = config.archive_path();
    tracing::debug!(%url, "downloading rclone v{}", config.version);
    download::fetch_archive(&url, &archive_path).await?;

    extractor.extract(&archive_path, &config.binaries_dir, config.member_name())?;
    let placed = place_binary(config, &binary_path);

    // Cleanup is unconditional: the archive and any nested folder go away
    // whether or not an executable turned up.
    if archive_path.exists() {
        tokio::fs::remove_file(&archive_path).await?;
    }
    let nested_dir = config.binaries_dir.join(config.archive_stem());
    if nested_dir.exists() {
        tokio::fs::remove_dir_all(&nested_dir).await?;
    }

    placed?;

    if !config.platform.is_windows() {
        set_executable(&binary_path)?;
    }

    tracing::debug!(path = %binary_path.display(), "sidecar provisioned");
    Ok(Outcome::Installed(binary_path))
}

/// Move the extracted executable to its final triple-qualified name.
///
/// The upstream zip sometimes nests the executable inside a version-named
/// folder and sometimes ships it flat, so check the nested location first
/// and fall back to the flat one.
fn place_binary(config: &ProvisionConfig, binary_path: &Path) -> Result<()> {
    let nested = config
        .binaries_dir
        .join(config.archive_stem())
        .join(config.member_name());
    let flat = config.binaries_dir.join(config.member_name());

    let found = if nested.exists() {
        nested
    } else if flat.exists() {
        flat
    } else {
        return Err(ProvisionError::ExtractionIncomplete {
            archive: config.archive_path(),
        });
    };

    std::fs::rename(&found, binary_path)?;
    Ok(())
}

// Downloaded files are not marked executable by default.
#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
