use tracing::info;

use super::context::InstallationState;
use crate::core::downloader::Fetcher;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::process::{CommandSpec, ProcessRunner};

pub const FABRIC_MAVEN: &str = "https://maven.fabricmc.net";

/// Download URL of the standalone Fabric installer jar in `repository`.
pub fn installer_url(repository: &str, installer_version: &str) -> String {
    format!(
        "{}/net/fabricmc/fabric-installer/{v}/fabric-installer-{v}.jar",
        repository.trim_end_matches('/'),
        v = installer_version
    )
}

/// `java -jar <installer> server -mcversion <v> -loader <v> -dir <game>`.
pub fn installer_command(state: &InstallationState) -> CommandSpec {
    CommandSpec::new(&state.java_binary, &state.game_dir)
        .arg("-jar")
        .arg(state.installer_path.to_string_lossy())
        .args(["server", "-mcversion"])
        .arg(&state.runtime_version)
        .arg("-loader")
        .arg(&state.loader_version)
        .arg("-dir")
        .arg(state.game_dir.to_string_lossy())
        .arg("-downloadMinecraft")
}

/// What `ensure_installed` actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallReport {
    pub installer_downloaded: bool,
}

/// Makes sure the Fabric loader is installed into the game directory.
pub struct InstallationManager<'a> {
    fetcher: &'a dyn Fetcher,
    runner: &'a dyn ProcessRunner,
}

impl<'a> InstallationManager<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, runner: &'a dyn ProcessRunner) -> Self {
        Self { fetcher, runner }
    }

    /// Create the game directory, download the installer if it is not on disk
    /// yet, then run it. The presence check does not look at file integrity.
    pub async fn ensure_installed(&self, state: &InstallationState) -> LauncherResult<InstallReport> {
        tokio::fs::create_dir_all(&state.game_dir)
            .await
            .map_err(|e| LauncherError::io(&state.game_dir, e))?;

        info!(
            "Setting up Minecraft {} with Fabric {}...",
            state.runtime_version, state.loader_version
        );

        let present = tokio::fs::try_exists(&state.installer_path)
            .await
            .map_err(|e| LauncherError::io(&state.installer_path, e))?;

        if !present {
            info!("Downloading Fabric installer...");
            self.fetcher
                .fetch(&state.installer_url, &state.installer_path)
                .await?;
        }

        info!("Installing Fabric...");
        let cmd = installer_command(state);
        let result = self.runner.run(&cmd).await?;
        if !result.success() {
            return Err(LauncherError::NonZeroExit {
                program: cmd.program_name(),
                code: result.exit_code,
            });
        }

        Ok(InstallReport {
            installer_downloaded: !present,
        })
    }
}
