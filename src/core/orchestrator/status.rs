use serde::Serialize;

use super::PipelineState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUser {
    pub name: String,
    pub uuid: String,
}

/// Read-only answer to the presentation shell's status query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub authenticated: bool,
    pub user: Option<StatusUser>,
    pub version: String,
    pub state: PipelineState,
}
