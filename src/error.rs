use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("unsupported platform or architecture: {os} {arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("failed to download rclone: {status} for {url}")]
    DownloadFailed {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("no rclone executable found after extracting {}", archive.display())]
    ExtractionIncomplete { archive: PathBuf },

    #[error("archive tool '{tool}' failed: {msg}")]
    Extractor { tool: &'static str, msg: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
