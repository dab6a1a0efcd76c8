pub mod context;
pub mod fabric;

pub use context::InstallationState;
pub use fabric::{InstallReport, InstallationManager};
