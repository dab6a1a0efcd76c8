use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};

/// Persisted launcher state. Serialized as `{ "version": "<string>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(rename = "version")]
    pub schema_version: String,
}

impl LauncherConfig {
    pub fn new(schema_version: impl Into<String>) -> Self {
        Self {
            schema_version: schema_version.into(),
        }
    }
}

/// Single-file JSON store. Every save replaces the whole file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory, then overwrite the file with `config`.
    pub async fn save(&self, config: &LauncherConfig) -> LauncherResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LauncherError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(config)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| LauncherError::io(&self.path, e))?;

        debug!("Saved launcher config to {:?}", self.path);
        Ok(())
    }

    /// Read the stored config, `None` if the file does not exist yet.
    pub async fn load(&self) -> LauncherResult<Option<LauncherConfig>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LauncherError::io(&self.path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested/root/config.json"));

        store.save(&LauncherConfig::new("1.0.0")).await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "version": "1.0.0" }));
    }

    #[tokio::test]
    async fn save_overwrites_instead_of_merging() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));
        std::fs::write(
            store.path(),
            r#"{ "version": "0.9.0", "selectedProfile": "legacy" }"#,
        )
        .unwrap();

        store.save(&LauncherConfig::new("1.0.0")).await.unwrap();
        store.save(&LauncherConfig::new("2.0.0")).await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "version": "2.0.0" }));
    }

    #[tokio::test]
    async fn load_returns_none_before_first_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));

        assert_eq!(store.load().await.unwrap(), None);

        store.save(&LauncherConfig::new("1.0.0")).await.unwrap();
        assert_eq!(
            store.load().await.unwrap(),
            Some(LauncherConfig::new("1.0.0"))
        );
    }
}
