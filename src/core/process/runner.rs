// ─── Process Runner ───
// Starts external executables with inherited stdio and reports their exit.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tracing::{debug, info};

use crate::core::error::{LauncherError, LauncherResult};

/// One external invocation: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Shell-escaped command line, suitable for copy/paste from the logs.
    pub fn display_line(&self) -> String {
        let program = shell_escape(&self.program.to_string_lossy());
        let args = self
            .args
            .iter()
            .map(|arg| shell_escape(arg))
            .collect::<Vec<_>>()
            .join(" ");

        if args.is_empty() {
            program
        } else {
            format!("{} {}", program, args)
        }
    }
}

/// Exit of a finished child. `exit_code` is `None` when the process was
/// terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    pub exit_code: Option<i32>,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// A started child whose exit can be awaited independently of the caller.
pub struct SpawnedProcess {
    pub pid: Option<u32>,
    pub exit: BoxFuture<'static, LauncherResult<ProcessResult>>,
}

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Start `cmd` without waiting for it.
    fn spawn(&self, cmd: &CommandSpec) -> LauncherResult<SpawnedProcess>;

    /// Start `cmd` and wait for it to exit.
    ///
    /// A non-zero exit resolves successfully with that code; only failure to
    /// start or to wait is an error.
    async fn run(&self, cmd: &CommandSpec) -> LauncherResult<ProcessResult> {
        let process = self.spawn(cmd)?;
        process.exit.await
    }
}

/// Runner backed by `tokio::process`. stdin, stdout and stderr are inherited
/// so the operator sees the child's output directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    fn spawn(&self, cmd: &CommandSpec) -> LauncherResult<SpawnedProcess> {
        let program = cmd.program_name();

        let mut command = tokio::process::Command::new(&cmd.program);
        command
            .args(&cmd.args)
            .current_dir(&cmd.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        debug!("Command (copy/paste): {}", cmd.display_line());

        let mut child = command
            .spawn()
            .map_err(|e| LauncherError::spawn(program.clone(), e))?;
        let pid = child.id();
        info!("Started {} (pid {:?})", program, pid);

        let exit = async move {
            let status = child
                .wait()
                .await
                .map_err(|e| LauncherError::Spawn { program, source: e })?;
            Ok::<_, LauncherError>(ProcessResult {
                exit_code: status.code(),
            })
        }
        .boxed();

        Ok(SpawnedProcess { pid, exit })
    }
}

fn shell_escape(raw: &str) -> String {
    if raw.is_empty() {
        return "\"\"".to_string();
    }

    if raw.chars().all(|ch| {
        ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '/' | ':' | '\\' | '=')
    }) {
        return raw.to_string();
    }

    format!("\"{}\"", raw.replace('"', "\\\""))
}
