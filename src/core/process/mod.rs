pub mod runner;

pub use runner::{CommandSpec, ProcessResult, ProcessRunner, SpawnedProcess, SystemRunner};
