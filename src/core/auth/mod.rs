use serde::{Deserialize, Serialize};

use crate::core::error::{LauncherError, LauncherResult};

/// Signed-in user handed over by the external identity provider.
/// The pipeline reads it and never refreshes or mutates it.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionIdentity {
    pub display_name: String,
    pub unique_id: String,
    pub access_token: String,
}

impl SessionIdentity {
    pub fn new(
        display_name: impl Into<String>,
        unique_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            unique_id: unique_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Local stand-in used when no identity provider is wired in.
    pub fn offline(display_name: &str) -> Self {
        let name = match display_name.trim() {
            "" => "Player",
            trimmed => trimmed,
        };
        Self::new(name, "player_uuid", "mock_token")
    }

    pub fn validate(&self) -> LauncherResult<()> {
        for (field, value) in [
            ("display_name", &self.display_name),
            ("unique_id", &self.unique_id),
            ("access_token", &self.access_token),
        ] {
            if value.trim().is_empty() {
                return Err(LauncherError::InvalidSession(format!("{field} is empty")));
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for SessionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIdentity")
            .field("display_name", &self.display_name)
            .field("unique_id", &self.unique_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
