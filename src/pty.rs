//! Running claude behind a pseudo-terminal.
//!
//! claude stalls when none of its standard streams is a terminal, which is
//! the normal situation when another program execs it. The
//! util-linux `script` utility allocates a pty, runs a shell command inside
//! it, and exits with that command's status, so we wrap the argv in
//! `script -q -c <cmd> /dev/null`. When `script` is not installed the argv is
//! run directly and may hang.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::config::PTY_HELPER;
use crate::error::{HeadlessError, Result};

/// Where `script` sends its transcript. We only want the pty, not the log.
const TRANSCRIPT_SINK: &str = "/dev/null";

/// Launches an argv either through the pty helper or directly.
#[derive(Debug, Clone)]
pub struct PtyLauncher {
    helper: Option<PathBuf>,
}

impl PtyLauncher {
    pub fn new(helper: Option<PathBuf>) -> Self {
        Self { helper }
    }

    /// Look the helper up on the current process `PATH`.
    pub fn discover() -> Self {
        let path = std::env::var_os("PATH").unwrap_or_default();
        Self::new(find_helper(&path))
    }

    /// The program and arguments actually spawned for `argv`.
    pub fn spawn_plan(&self, argv: &[String]) -> (OsString, Vec<String>) {
        match &self.helper {
            Some(helper) => (
                helper.clone().into_os_string(),
                vec![
                    "-q".into(),
                    "-c".into(),
                    shell_words::join(argv),
                    TRANSCRIPT_SINK.into(),
                ],
            ),
            None => match argv.split_first() {
                Some((program, rest)) => (OsString::from(program), rest.to_vec()),
                None => (OsString::new(), Vec::new()),
            },
        }
    }

    /// Run `argv` to completion in `cwd` and return its exit code.
    ///
    /// Standard streams are inherited. Blocks until the child exits.
    pub fn launch(&self, argv: &[String], cwd: Option<&Path>) -> Result<i32> {
        let (program, args) = self.spawn_plan(argv);
        if program.is_empty() {
            return Err(HeadlessError::Spawn {
                program: String::new(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty argv"),
            });
        }

        match &self.helper {
            Some(helper) => tracing::debug!(helper = %helper.display(), "running under pty helper"),
            None => tracing::debug!("{} not found on PATH, running directly", PTY_HELPER),
        }
        tracing::debug!(?argv, "launching");

        let mut command = Command::new(&program);
        command.args(&args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|source| HeadlessError::Spawn {
            program: program.to_string_lossy().into_owned(),
            source,
        })?;

        let code = exit_code(status);
        tracing::debug!(code, "child exited");
        Ok(code)
    }
}

/// First `script` on `path` that is an executable regular file.
///
/// Directories are searched in order; relative entries resolve against the
/// current directory.
pub fn find_helper(path: &OsStr) -> Option<PathBuf> {
    find_on_path(PTY_HELPER, path)
}

/// First executable regular file named `name` in the `PATH`-style list `path`.
pub fn find_on_path(name: &str, path: &OsStr) -> Option<PathBuf> {
    if path.is_empty() {
        return None;
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    which::which_in(name, Some(path), cwd)
        .ok()
        .filter(|found| found.is_file())
}

/// Map a child status onto our own exit code.
///
/// Signal deaths have no code; report them as `128 + signo` like a shell.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
