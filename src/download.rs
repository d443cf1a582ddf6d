//! Fetch the upstream release archive.

use std::path::Path;

use crate::error::{ProvisionError, Result};

/// Download the release archive at `url` and write it to `dest`.
///
/// A non-success response status aborts before anything touches the disk.
pub async fn fetch_archive(url: &str, dest: &Path) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent("sidecar-setup/0.1")
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(ProvisionError::DownloadFailed {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let bytes = response.bytes().await?;
    tokio::fs::write(dest, &bytes).await?;

    tracing::debug!(bytes = bytes.len(), path = %dest.display(), "archive written");
    Ok(())
}
