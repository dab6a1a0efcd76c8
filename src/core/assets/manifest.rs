use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const MODS_BASE_URL: &str = "https://example.com/mods";

/// Mods shipped with every install, in download order.
const BUILTIN_MODS: &[&str] = &[
    "CraftiumCore",
    "Emotes",
    "Pets",
    "Capes",
    "Cosmetics",
    "FirebaseAuth",
    "PromoCodes",
];

/// A named auxiliary package. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub source_url: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Optional SHA-1 checked after the transfer.
    #[serde(default)]
    pub sha1: Option<String>,
}

fn default_extension() -> String {
    "jar".into()
}

impl Asset {
    pub fn jar(name: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_url: source_url.into(),
            extension: default_extension(),
            sha1: None,
        }
    }

    pub fn with_sha1(mut self, sha1: impl Into<String>) -> Self {
        self.sha1 = Some(sha1.into());
        self
    }

    /// `<name>.<ext>`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

/// One pending download: where it comes from and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask<'a> {
    pub asset: &'a Asset,
    pub destination: PathBuf,
}

/// Ordered, immutable catalog of assets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    assets: Vec<Asset>,
}

impl AssetManifest {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    pub fn builtin() -> Self {
        let assets = BUILTIN_MODS
            .iter()
            .map(|name| Asset::jar(*name, format!("{}/{}.jar", MODS_BASE_URL, name)))
            .collect();
        Self { assets }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Lazily yields one task per asset in declared order. The returned
    /// iterator is consumed once; call again to start over.
    pub fn download_tasks<'a>(&'a self, destination_dir: &Path) -> DownloadTasks<'a> {
        DownloadTasks {
            inner: self.assets.iter(),
            destination_dir: destination_dir.to_path_buf(),
        }
    }
}

pub struct DownloadTasks<'a> {
    inner: std::slice::Iter<'a, Asset>,
    destination_dir: PathBuf,
}

impl<'a> Iterator for DownloadTasks<'a> {
    type Item = DownloadTask<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let asset = self.inner.next()?;
        Some(DownloadTask {
            asset,
            destination: self.destination_dir.join(asset.file_name()),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for DownloadTasks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_manifest_keeps_declared_order() {
        let manifest = AssetManifest::builtin();
        let names: Vec<_> = manifest.assets().iter().map(|a| a.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "CraftiumCore",
                "Emotes",
                "Pets",
                "Capes",
                "Cosmetics",
                "FirebaseAuth",
                "PromoCodes"
            ]
        );
        assert_eq!(
            manifest.assets()[1].source_url,
            "https://example.com/mods/Emotes.jar"
        );
    }

    #[test]
    fn tasks_target_name_dot_extension_in_destination() {
        let manifest = AssetManifest::new(vec![
            Asset::jar("X", "http://h/x"),
            Asset {
                extension: "zip".into(),
                ..Asset::jar("Pack", "http://h/pack")
            },
        ]);

        let tasks: Vec<_> = manifest.download_tasks(Path::new("/game/mods")).collect();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].destination, PathBuf::from("/game/mods/X.jar"));
        assert_eq!(tasks[1].destination, PathBuf::from("/game/mods/Pack.zip"));
    }

    #[test]
    fn asset_deserializes_with_default_extension() {
        let asset: Asset =
            serde_json::from_str(r#"{ "name": "Capes", "source_url": "http://h/capes" }"#).unwrap();

        assert_eq!(asset.file_name(), "Capes.jar");
        assert_eq!(asset.sha1, None);
    }
}
