// ─── Orchestrator ───
// Install -> fetch assets -> persist config -> launch, once, in that order.

pub mod status;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::core::assets::{fetch_all, AssetManifest, FetchSummary};
use crate::core::auth::SessionIdentity;
use crate::core::downloader::Fetcher;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::launch::{LaunchController, LaunchHandle};
use crate::core::loaders::{InstallReport, InstallationManager};
use crate::core::process::ProcessRunner;
use crate::core::state::{ConfigStore, LauncherConfig, LauncherSettings};

pub use status::{StatusSnapshot, StatusUser};

/// Pipeline position. Only moves forward; `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineState {
    Idle,
    Installing,
    FetchingAssets,
    PersistingConfig,
    Launching,
    Done,
    Failed,
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Installing => write!(f, "installing"),
            PipelineState::FetchingAssets => write!(f, "fetching-assets"),
            PipelineState::PersistingConfig => write!(f, "persisting-config"),
            PipelineState::Launching => write!(f, "launching"),
            PipelineState::Done => write!(f, "done"),
            PipelineState::Failed => write!(f, "failed"),
        }
    }
}

/// The stage that failed plus the untouched error it produced.
#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    pub stage: PipelineState,
    pub source: LauncherError,
}

/// Result of a successful pass.
pub struct LaunchOutcome {
    pub install: InstallReport,
    pub assets: FetchSummary,
    pub handle: LaunchHandle,
}

pub struct Orchestrator<F, R> {
    settings: LauncherSettings,
    manifest: AssetManifest,
    fetcher: F,
    runner: R,
    state: PipelineState,
    failed_at: Option<PipelineState>,
    identity: Option<SessionIdentity>,
}

impl<F, R> Orchestrator<F, R>
where
    F: Fetcher,
    R: ProcessRunner,
{
    pub fn new(settings: LauncherSettings, manifest: AssetManifest, fetcher: F, runner: R) -> Self {
        Self {
            settings,
            manifest,
            fetcher,
            runner,
            state: PipelineState::Idle,
            failed_at: None,
            identity: None,
        }
    }

    pub fn settings(&self) -> &LauncherSettings {
        &self.settings
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Stage that was active when the pipeline failed, if it did.
    pub fn failed_at(&self) -> Option<PipelineState> {
        self.failed_at
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            authenticated: self.identity.is_some(),
            user: self.identity.as_ref().map(|identity| StatusUser {
                name: identity.display_name.clone(),
                uuid: identity.unique_id.clone(),
            }),
            version: self.settings.launcher_version.clone(),
            state: self.state,
        }
    }

    /// Run every stage once. The first error stops the pass; nothing that
    /// already happened is rolled back and the game is not started.
    ///
    /// Returns as soon as the game process has been spawned; its exit is only
    /// observed through the returned handle.
    pub async fn run(&mut self, identity: SessionIdentity) -> Result<LaunchOutcome, PipelineError> {
        if self.state != PipelineState::Idle {
            return Err(PipelineError {
                stage: self.state,
                source: LauncherError::PipelineAlreadyStarted,
            });
        }

        info!(
            "=== {} Launcher v{} ===",
            self.settings.launcher_name, self.settings.launcher_version
        );
        self.settle(identity.validate())?;
        self.identity = Some(identity.clone());

        self.advance(PipelineState::Installing);
        let install_state = self.settings.installation_state();
        let result = InstallationManager::new(&self.fetcher, &self.runner)
            .ensure_installed(&install_state)
            .await;
        let install = self.settle(result)?;

        self.advance(PipelineState::FetchingAssets);
        let result = fetch_all(
            &self.fetcher,
            &self.manifest,
            &self.settings.mods_dir(),
            self.settings.asset_refresh,
        )
        .await;
        let assets = self.settle(result)?;

        self.advance(PipelineState::PersistingConfig);
        let store = ConfigStore::new(self.settings.config_path());
        let result = store
            .save(&LauncherConfig::new(&self.settings.launcher_version))
            .await;
        self.settle(result)?;

        self.advance(PipelineState::Launching);
        let result = LaunchController::new(&self.runner, &self.settings)
            .launch(&identity, self.settings.game_dir());
        let handle = self.settle(result)?;

        self.advance(PipelineState::Done);
        Ok(LaunchOutcome {
            install,
            assets,
            handle,
        })
    }

    fn advance(&mut self, next: PipelineState) {
        info!("Pipeline: {} -> {}", self.state, next);
        self.state = next;
    }

    fn settle<T>(&mut self, result: LauncherResult<T>) -> Result<T, PipelineError> {
        result.map_err(|source| {
            let stage = self.state;
            error!(
                "Pipeline failed during {} ({}): {}",
                stage,
                source.category(),
                source
            );
            self.failed_at = Some(stage);
            self.state = PipelineState::Failed;
            PipelineError { stage, source }
        })
    }
}
