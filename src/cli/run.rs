use crate::cli::Cli;
use crate::command::build_command;
use crate::error::{HeadlessError, Result};
use crate::pty::PtyLauncher;
use crate::request::InvocationRequest;

/// Parse → resolve → launch. Returns the exit code to terminate with.
pub fn run(cli: Cli) -> Result<i32> {
    let request = cli.into_request();
    run_request(&request, &PtyLauncher::discover())
}

/// Launch an already-built request with the given launcher.
///
/// Fails with [`HeadlessError::BinaryNotFound`] before spawning anything if
/// the claude binary does not exist, and with [`HeadlessError::NonUtf8Path`]
/// if its path cannot be passed through the helper's command string.
pub fn run_request(request: &InvocationRequest, launcher: &PtyLauncher) -> Result<i32> {
    if !request.claude_bin.exists() {
        return Err(HeadlessError::BinaryNotFound {
            path: request.claude_bin.clone(),
        });
    }
    tracing::debug!(claude_bin = %request.claude_bin.display(), "resolved claude binary");

    let argv = build_command(request)?;
    launcher.launch(&argv, request.cwd.as_deref())
}
