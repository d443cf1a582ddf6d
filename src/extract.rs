//! Archive extraction behind a narrow capability interface.
//!
//! Upstream ships zip archives, and the host's native tool unpacks them:
//! PowerShell's `Expand-Archive` on Windows, `unzip` everywhere else. The
//! trait keeps the two subprocess code paths behind one seam so the
//! provisioning flow can be exercised with fake extractors.

use std::path::Path;
use std::process::Command;

use crate::error::{ProvisionError, Result};
use crate::platform::HostPlatform;

/// Unpack `archive` into `dest_dir` so that the member named `member` ends
/// up either flat in `dest_dir` or under the archive's own top-level folder.
/// The caller resolves which of the two locations the executable landed in.
pub trait Extractor {
    fn extract(&self, archive: &Path, dest_dir: &Path, member: &str) -> Result<()>;
}

/// `Expand-Archive` via PowerShell. Unpacks the whole archive, including any
/// version-named top-level folder.
pub struct PowershellExtractor;

impl Extractor for PowershellExtractor {
    fn extract(&self, archive: &Path, dest_dir: &Path, _member: &str) -> Result<()> {
        let script = format!(
            "Expand-Archive -Path \"{}\" -DestinationPath \"{}\" -Force",
            archive.display(),
            dest_dir.display()
        );
        run("powershell", Command::new("powershell").args(["-Command", &script]))
    }
}

/// `unzip -j`: extracts only the wanted member, junking its folder prefix so
/// the file lands flat in `dest_dir`.
pub struct UnzipExtractor;

impl Extractor for UnzipExtractor {
    fn extract(&self, archive: &Path, dest_dir: &Path, member: &str) -> Result<()> {
        let pattern = format!("**/{member}");
        run(
            "unzip",
            Command::new("unzip")
                .arg("-j")
                .arg(archive)
                .arg(&pattern)
                .arg("-d")
                .arg(dest_dir),
        )
    }
}

/// The extractor matching a platform's native archive tooling.
pub fn host_extractor(platform: HostPlatform) -> Box<dyn Extractor> {
    if platform.is_windows() {
        Box::new(PowershellExtractor)
    } else {
        Box::new(UnzipExtractor)
    }
}

fn run(tool: &'static str, cmd: &mut Command) -> Result<()> {
    tracing::debug!(tool, "running archive tool");
    let status = cmd.status().map_err(|e| ProvisionError::Extractor {
        tool,
        msg: e.to_string(),
    })?;

    if !status.success() {
        return Err(ProvisionError::Extractor {
            tool,
            msg: format!("exited with {status}"),
        });
    }
    Ok(())
}
