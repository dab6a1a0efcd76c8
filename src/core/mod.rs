// ─── CraftiumClient Core ───
// Install-and-launch pipeline for a Fabric client.
//
// Architecture:
//   core/
//     downloader/   — Streaming HTTP fetch into a local file
//     process/      — External process spawning with inherited stdio
//     loaders/      — Fabric installer download + invocation
//     assets/       — Ordered mod manifest + sequential fetch
//     state/        — Immutable settings + config.json store
//     launch/       — Game process spawn + detached exit monitor
//     auth/         — Session identity handed in by the identity provider
//     orchestrator/ — Stage sequencing and status snapshot

pub mod assets;
pub mod auth;
pub mod downloader;
pub mod error;
pub mod http;
pub mod java;
pub mod launch;
pub mod loaders;
pub mod orchestrator;
pub mod process;
pub mod state;

#[cfg(test)]
pub(crate) mod test_fixtures;
