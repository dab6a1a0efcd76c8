use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::java;
use crate::core::loaders::{fabric, InstallationState};

pub const LAUNCHER_NAME: &str = "CraftiumClient";
pub const LAUNCHER_VERSION: &str = env!("CARGO_PKG_VERSION");

const APP_DIR_NAME: &str = ".craftiumclient";
const CONFIG_FILE: &str = "config.json";

/// Whether the asset step re-downloads files that already exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetRefresh {
    /// Every run fetches every asset again, overwriting what is on disk.
    #[default]
    Always,
    /// Assets whose destination file already exists are skipped.
    IfMissing,
}

impl FromStr for AssetRefresh {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(AssetRefresh::Always),
            "if-missing" | "if_missing" => Ok(AssetRefresh::IfMissing),
            other => Err(format!("unknown asset refresh policy '{other}'")),
        }
    }
}

/// Immutable launcher configuration, built once at startup and handed to
/// every component that needs a path, a version or a launch flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    pub launcher_name: String,
    pub launcher_version: String,
    pub runtime_version: String,
    pub loader_version: String,
    pub installer_version: String,
    pub fabric_maven: String,
    pub root_dir: PathBuf,
    pub java_binary: PathBuf,
    pub max_heap: String,
    pub min_heap: String,
    pub installer_file: String,
    pub launch_jar: String,
    pub asset_refresh: AssetRefresh,
}

impl LauncherSettings {
    /// Defaults rooted at `root`, with no environment lookups.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            launcher_name: LAUNCHER_NAME.into(),
            launcher_version: LAUNCHER_VERSION.into(),
            runtime_version: "1.21.4".into(),
            loader_version: "0.15.10".into(),
            installer_version: "0.11.2".into(),
            fabric_maven: fabric::FABRIC_MAVEN.into(),
            root_dir: root.into(),
            java_binary: PathBuf::from(java::java_exe()),
            max_heap: "2G".into(),
            min_heap: "1G".into(),
            installer_file: "fabric-installer.jar".into(),
            launch_jar: "fabric-server-launch.jar".into(),
            asset_refresh: AssetRefresh::Always,
        }
    }

    /// Defaults under `~/.craftiumclient`, adjusted by process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = lookup("CRAFTIUM_HOME")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_root_dir);

        let mut settings = Self::with_root(root);
        settings.java_binary = java::resolve_java_binary(&lookup);

        if let Some(maven) = lookup("CRAFTIUM_FABRIC_MAVEN").filter(|v| !v.trim().is_empty()) {
            settings.fabric_maven = maven;
        }

        if let Some(raw) = lookup("CRAFTIUM_ASSET_REFRESH") {
            match raw.parse::<AssetRefresh>() {
                Ok(policy) => settings.asset_refresh = policy,
                Err(err) => warn!("Ignoring CRAFTIUM_ASSET_REFRESH: {}", err),
            }
        }

        settings
    }

    pub fn game_dir(&self) -> PathBuf {
        self.root_dir.join("game")
    }

    pub fn mods_dir(&self) -> PathBuf {
        self.game_dir().join("mods")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root_dir.join(CONFIG_FILE)
    }

    pub fn installer_path(&self) -> PathBuf {
        self.game_dir().join(&self.installer_file)
    }

    pub fn launch_jar_path(&self) -> PathBuf {
        self.game_dir().join(&self.launch_jar)
    }

    pub fn installer_url(&self) -> String {
        fabric::installer_url(&self.fabric_maven, &self.installer_version)
    }

    /// Install target derived from these settings.
    pub fn installation_state(&self) -> InstallationState {
        InstallationState {
            runtime_version: self.runtime_version.clone(),
            loader_version: self.loader_version.clone(),
            installer_path: self.installer_path(),
            installer_url: self.installer_url(),
            game_dir: self.game_dir(),
            java_binary: self.java_binary.clone(),
        }
    }
}

fn default_root_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
}
