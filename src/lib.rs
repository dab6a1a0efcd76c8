pub mod core;

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use crate::core::assets::{Asset, AssetManifest};
pub use crate::core::auth::SessionIdentity;
pub use crate::core::downloader::{Downloader, Fetcher};
pub use crate::core::error::{LauncherError, LauncherResult};
pub use crate::core::orchestrator::{Orchestrator, PipelineError, PipelineState};
pub use crate::core::process::{ProcessRunner, SystemRunner};
pub use crate::core::state::LauncherSettings;

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,craftium_lib=debug")),
        )
        .init();
}

/// Full launcher run: offline identity, pipeline, then wait for the game.
pub async fn run() -> ExitCode {
    init_logging();

    let settings = LauncherSettings::from_env();
    let player = std::env::var("CRAFTIUM_PLAYER").unwrap_or_default();
    let identity = SessionIdentity::offline(&player);

    let downloader = match Downloader::new() {
        Ok(downloader) => downloader,
        Err(err) => {
            error!("Could not build HTTP client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut orchestrator =
        Orchestrator::new(settings, AssetManifest::builtin(), downloader, SystemRunner);

    match orchestrator.run(identity).await {
        Ok(outcome) => {
            info!(
                "Game started (pid {:?}); {} mods downloaded",
                outcome.handle.pid(),
                outcome.assets.downloaded
            );
            outcome.handle.wait().await;
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
