use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the launcher pipeline.
/// Every module returns `Result<T, LauncherError>`.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    // ── Integrity ───────────────────────────────────────
    #[error("SHA-1 mismatch for {path:?}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    // ── Processes ───────────────────────────────────────
    #[error("Executable not found: {program}")]
    ProgramNotFound { program: String },

    #[error("Permission denied starting {program}")]
    ProgramNotExecutable { program: String },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with code {code:?}")]
    NonZeroExit { program: String, code: Option<i32> },

    // ── Session ─────────────────────────────────────────
    #[error("Invalid session identity: {0}")]
    InvalidSession(String),

    #[error("Pipeline already ran; create a new orchestrator to start over")]
    PipelineAlreadyStarted,

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;

impl LauncherError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LauncherError::Io {
            path: path.into(),
            source,
        }
    }

    /// Maps a failed `spawn()` onto the not-found / permission taxonomy.
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        let program = program.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => LauncherError::ProgramNotFound { program },
            std::io::ErrorKind::PermissionDenied => {
                LauncherError::ProgramNotExecutable { program }
            }
            _ => LauncherError::Spawn { program, source },
        }
    }

    /// Stable label of the failure class, used in logs and by callers that
    /// only care about the broad kind of failure.
    pub fn category(&self) -> &'static str {
        match self {
            LauncherError::Io { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => "permission",
                _ => "path",
            },
            LauncherError::Transport { .. } => "transport",
            LauncherError::DownloadFailed { .. } => "http-status",
            LauncherError::ChecksumMismatch { .. } => "checksum",
            LauncherError::ProgramNotFound { .. } => "not-found",
            LauncherError::ProgramNotExecutable { .. } => "permission",
            LauncherError::Spawn { .. } => "spawn",
            LauncherError::NonZeroExit { .. } => "non-zero-exit",
            LauncherError::InvalidSession(_) => "session",
            LauncherError::PipelineAlreadyStarted => "state",
            LauncherError::Json(_) => "json",
        }
    }
}

// ── Serialization for the status surface ────────────────
impl serde::Serialize for LauncherError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
