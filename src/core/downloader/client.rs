use std::path::Path;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use sha1::{Digest, Sha1};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::http::build_http_client;

/// Fetches one remote resource into one local file.
///
/// Implementations must not retry, resume or clean up: a failure after the
/// destination was opened may leave a partial file behind.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, dest: &Path) -> LauncherResult<()>;

    /// `fetch` followed by an optional SHA-1 check of the written file.
    async fn fetch_verified(
        &self,
        url: &str,
        dest: &Path,
        sha1_expected: Option<&str>,
    ) -> LauncherResult<()> {
        self.fetch(url, dest).await?;
        if let Some(expected) = sha1_expected {
            verify_sha1(dest, expected).await?;
        }
        Ok(())
    }
}

/// Streaming HTTP downloader.
#[derive(Clone)]
pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new() -> LauncherResult<Self> {
        let client = build_http_client().map_err(|source| LauncherError::Transport {
            url: String::new(),
            source,
        })?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for Downloader {
    /// Opens `dest` for writing, then streams the GET body into it.
    ///
    /// Creates parent directories as needed. The file is truncated before
    /// the request is sent, so an HTTP or transport failure leaves an empty
    /// or partial file on disk.
    async fn fetch(&self, url: &str, dest: &Path) -> LauncherResult<()> {
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LauncherError::io(parent, e))?;
        }

        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| LauncherError::io(dest, e))?;

        let transport = |source: reqwest::Error| LauncherError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LauncherError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut written: u64 = 0;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(transport)?;
            file.write_all(&chunk)
                .await
                .map_err(|e| LauncherError::io(dest, e))?;
            written += chunk.len() as u64;
        }

        file.flush().await.map_err(|e| LauncherError::io(dest, e))?;

        debug!("Downloaded: {} -> {:?} ({} bytes)", url, dest, written);
        Ok(())
    }
}

/// Validate an existing file's SHA-1, failing with `ChecksumMismatch`.
pub async fn verify_sha1(path: &Path, expected: &str) -> LauncherResult<()> {
    let mut file = tokio::fs::File::open(path)
        .await
        .map_err(|e| LauncherError::io(path, e))?;

    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; 64 * 1024];
    loop {
        let n = file
            .read(&mut buf)
            .await
            .map_err(|e| LauncherError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let actual = hex::encode(hasher.finalize());
    if !actual.eq_ignore_ascii_case(expected) {
        return Err(LauncherError::ChecksumMismatch {
            path: path.to_path_buf(),
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}
