// ─── Launch Task ───
// Spawns the game process and watches its exit from a detached task.

use std::path::{Path, PathBuf};

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::core::auth::SessionIdentity;
use crate::core::error::LauncherResult;
use crate::core::process::{CommandSpec, ProcessResult, ProcessRunner};
use crate::core::state::LauncherSettings;

/// `java -Xmx<max> -Xms<min> -jar <game>/<launch jar> nogui`, run from `game_dir`.
pub fn launch_command(settings: &LauncherSettings, game_dir: &Path) -> CommandSpec {
    let jar_path = game_dir.join(&settings.launch_jar);

    CommandSpec::new(&settings.java_binary, game_dir)
        .arg(format!("-Xmx{}", settings.max_heap))
        .arg(format!("-Xms{}", settings.min_heap))
        .arg("-jar")
        .arg(jar_path.to_string_lossy())
        .arg("nogui")
}

/// A running game. Dropping the handle does not stop the game or the
/// monitor; the exit is still logged.
pub struct LaunchHandle {
    pid: Option<u32>,
    monitor: JoinHandle<Option<ProcessResult>>,
}

impl LaunchHandle {
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    pub fn is_finished(&self) -> bool {
        self.monitor.is_finished()
    }

    /// Wait for the game to exit. `None` if waiting on the child failed.
    pub async fn wait(self) -> Option<ProcessResult> {
        self.monitor.await.ok().flatten()
    }
}

/// Starts the game in fire-and-forget mode.
pub struct LaunchController<'a> {
    runner: &'a dyn ProcessRunner,
    settings: &'a LauncherSettings,
}

impl<'a> LaunchController<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, settings: &'a LauncherSettings) -> Self {
        Self { runner, settings }
    }

    /// Spawn the game with `game_dir` as working directory and return as soon
    /// as the process exists. Only a failure to start is reported as an error.
    pub fn launch(
        &self,
        identity: &SessionIdentity,
        game_dir: impl Into<PathBuf>,
    ) -> LauncherResult<LaunchHandle> {
        let game_dir = game_dir.into();
        info!("Launching Minecraft as {}...", identity.display_name);

        let cmd = launch_command(self.settings, &game_dir);
        let process = self.runner.spawn(&cmd)?;
        let pid = process.pid;
        let exit = process.exit;

        let monitor = tokio::spawn(async move {
            match exit.await {
                Ok(result) if result.success() => {
                    info!("Minecraft exited with code 0");
                    Some(result)
                }
                Ok(result) => {
                    warn!("Minecraft exited with code {:?}", result.exit_code);
                    Some(result)
                }
                Err(err) => {
                    error!("Lost track of Minecraft process: {}", err);
                    None
                }
            }
        });

        Ok(LaunchHandle { pid, monitor })
    }
}
