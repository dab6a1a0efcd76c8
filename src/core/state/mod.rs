pub mod config_store;
pub mod settings;

pub use config_store::{ConfigStore, LauncherConfig};
pub use settings::{AssetRefresh, LauncherSettings, LAUNCHER_NAME, LAUNCHER_VERSION};
