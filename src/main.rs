use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;

use sidecar_setup::{host_extractor, Outcome, ProvisionConfig};

/// Packaging binaries directory, relative to the repository root.
const BINARIES_DIR: &str = "src-tauri/binaries";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "[sidecar]".red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> sidecar_setup::Result<()> {
    let config = ProvisionConfig::detect(PathBuf::from(BINARIES_DIR))?;
    let extractor = host_extractor(config.platform);

    println!(
        "{} provisioning rclone v{} for {}",
        "→".cyan(),
        config.version,
        config.target_triple()
    );

    match sidecar_setup::provision(&config, extractor.as_ref()).await? {
        Outcome::AlreadyPresent(path) => {
            println!(
                "{} rclone sidecar already exists at {}",
                "✓".green(),
                path.display()
            );
        }
        Outcome::Installed(path) => {
            println!(
                "{} rclone sidecar setup complete: {}",
                "✓".green(),
                path.display()
            );
        }
    }
    Ok(())
}
