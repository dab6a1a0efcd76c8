use std::path::PathBuf;

/// Everything needed to install the loader into one game directory.
/// Built from `LauncherSettings` so the install step never reads globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationState {
    pub runtime_version: String,
    pub loader_version: String,
    pub installer_path: PathBuf,
    pub installer_url: String,
    pub game_dir: PathBuf,
    pub java_binary: PathBuf,
}
