use std::path::Path;

use tracing::{debug, info};

use super::manifest::AssetManifest;
use crate::core::downloader::Fetcher;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::state::AssetRefresh;

/// Counts of one `fetch_all` pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub downloaded: usize,
    pub skipped: usize,
}

/// Download every asset into `destination_dir`, strictly one at a time and
/// in manifest order. The first failure stops the pass; files fetched before
/// it stay on disk.
pub async fn fetch_all(
    fetcher: &dyn Fetcher,
    manifest: &AssetManifest,
    destination_dir: &Path,
    refresh: AssetRefresh,
) -> LauncherResult<FetchSummary> {
    tokio::fs::create_dir_all(destination_dir)
        .await
        .map_err(|e| LauncherError::io(destination_dir, e))?;

    let mut summary = FetchSummary::default();

    for task in manifest.download_tasks(destination_dir) {
        if refresh == AssetRefresh::IfMissing
            && tokio::fs::try_exists(&task.destination)
                .await
                .map_err(|e| LauncherError::io(&task.destination, e))?
        {
            debug!("Skipping {} (already present)", task.asset.name);
            summary.skipped += 1;
            continue;
        }

        info!("Downloading {}...", task.asset.name);
        fetcher
            .fetch_verified(
                &task.asset.source_url,
                &task.destination,
                task.asset.sha1.as_deref(),
            )
            .await?;
        summary.downloaded += 1;
    }

    Ok(summary)
}
