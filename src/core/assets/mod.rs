pub mod fetch;
pub mod manifest;

pub use fetch::{fetch_all, FetchSummary};
pub use manifest::{Asset, AssetManifest, DownloadTask, DownloadTasks};
