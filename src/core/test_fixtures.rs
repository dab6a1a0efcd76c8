//! Recording fakes for the `Fetcher` and `ProcessRunner` seams.
//!
//! Both fakes append to one shared [`EventLog`], so tests can assert on the
//! relative order of downloads and process invocations across components.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::FutureExt;

use crate::core::downloader::Fetcher;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::process::{CommandSpec, ProcessResult, ProcessRunner, SpawnedProcess};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchStarted(String),
    FetchFinished(String),
    Ran(CommandSpec),
    Spawned(CommandSpec),
}

#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    pub fn fetched_urls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::FetchStarted(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn runs(&self) -> Vec<CommandSpec> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Ran(cmd) => Some(cmd),
                _ => None,
            })
            .collect()
    }

    pub fn spawns(&self) -> Vec<CommandSpec> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Spawned(cmd) => Some(cmd),
                _ => None,
            })
            .collect()
    }
}

/// Writes `payload:<url>` to the destination instead of touching the network.
#[derive(Debug, Clone)]
pub struct RecordingFetcher {
    log: EventLog,
    failing: Vec<String>,
}

impl RecordingFetcher {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            failing: Vec::new(),
        }
    }

    pub fn failing_on(mut self, url: &str) -> Self {
        self.failing.push(url.to_string());
        self
    }
}

#[async_trait]
impl Fetcher for RecordingFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> LauncherResult<()> {
        self.log.push(Event::FetchStarted(url.to_string()));
        tokio::task::yield_now().await;

        let result = if self.failing.iter().any(|u| u == url) {
            Err(LauncherError::DownloadFailed {
                url: url.to_string(),
                status: 500,
            })
        } else {
            if let Some(parent) = dest.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| LauncherError::io(parent, e))?;
            }
            tokio::fs::write(dest, format!("payload:{url}"))
                .await
                .map_err(|e| LauncherError::io(dest, e))
        };

        self.log.push(Event::FetchFinished(url.to_string()));
        result
    }
}

/// Records invocations and answers with configured exit codes.
#[derive(Debug, Clone)]
pub struct RecordingRunner {
    log: EventLog,
    run_exit: Option<i32>,
    child_exit: Option<i32>,
    missing_program: bool,
}

impl RecordingRunner {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            run_exit: Some(0),
            child_exit: Some(0),
            missing_program: false,
        }
    }

    pub fn with_run_exit(mut self, code: Option<i32>) -> Self {
        self.run_exit = code;
        self
    }

    pub fn with_child_exit(mut self, code: Option<i32>) -> Self {
        self.child_exit = code;
        self
    }

    pub fn with_missing_program(mut self) -> Self {
        self.missing_program = true;
        self
    }

    fn check_program(&self, cmd: &CommandSpec) -> LauncherResult<()> {
        if self.missing_program {
            return Err(LauncherError::ProgramNotFound {
                program: cmd.program_name(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    fn spawn(&self, cmd: &CommandSpec) -> LauncherResult<SpawnedProcess> {
        self.log.push(Event::Spawned(cmd.clone()));
        self.check_program(cmd)?;

        let exit_code = self.child_exit;
        Ok(SpawnedProcess {
            pid: Some(4242),
            exit: async move { Ok::<_, LauncherError>(ProcessResult { exit_code }) }.boxed(),
        })
    }

    async fn run(&self, cmd: &CommandSpec) -> LauncherResult<ProcessResult> {
        self.log.push(Event::Ran(cmd.clone()));
        self.check_program(cmd)?;
        Ok(ProcessResult {
            exit_code: self.run_exit,
        })
    }
}
