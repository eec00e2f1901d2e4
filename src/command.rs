use crate::error::{HeadlessError, Result};
use crate::request::InvocationRequest;

/// Build the argv for claude from a request. The binary path is always first.
///
/// The argv ends up inside a shell command string for the pty helper, so a
/// binary path that is not valid UTF-8 is rejected rather than re-encoded.
///
/// The prompt is emitted whenever it was given, even if empty, since `-p ""`
/// still switches claude into print mode. Other string options are skipped
/// when empty. `--continue` and `--resume` are passed through together if
/// both are set; claude decides what that means.
pub fn build_command(req: &InvocationRequest) -> Result<Vec<String>> {
    let bin = req
        .claude_bin
        .to_str()
        .ok_or_else(|| HeadlessError::NonUtf8Path {
            path: req.claude_bin.clone(),
        })?;
    let mut cmd = vec![bin.to_string()];

    if let Some(mode) = req.permission_mode {
        push_flag(&mut cmd, "--permission-mode", &mode.to_string());
    }

    if let Some(prompt) = &req.prompt {
        push_flag(&mut cmd, "-p", prompt);
    }

    push_non_empty(&mut cmd, "--allowedTools", req.allowed_tools.as_deref());

    if let Some(format) = req.output_format {
        push_flag(&mut cmd, "--output-format", &format.to_string());
    }

    push_non_empty(&mut cmd, "--json-schema", req.json_schema.as_deref());
    push_non_empty(
        &mut cmd,
        "--append-system-prompt",
        req.append_system_prompt.as_deref(),
    );
    push_non_empty(&mut cmd, "--system-prompt", req.system_prompt.as_deref());

    if req.continue_latest {
        cmd.push("--continue".into());
    }

    push_non_empty(&mut cmd, "--resume", req.resume.as_deref());

    cmd.extend(req.extra.iter().cloned());
    Ok(cmd)
}

fn push_flag(cmd: &mut Vec<String>, flag: &str, value: &str) {
    cmd.push(flag.into());
    cmd.push(value.into());
}

fn push_non_empty(cmd: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        push_flag(cmd, flag, value);
    }
}
