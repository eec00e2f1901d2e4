pub mod run;

pub use run::run;

use std::path::PathBuf;

use clap::Parser;

use crate::config::resolve_binary_from_env;
use crate::request::{InvocationRequest, OutputFormat, PermissionMode};

/// Run Claude Code (claude CLI) headlessly via a pseudo-terminal.
#[derive(Debug, Parser)]
#[command(name = "claude-headless", version)]
pub struct Cli {
    /// Headless prompt (claude -p)
    #[arg(short = 'p', long)]
    pub prompt: Option<String>,

    /// Permission mode (plan for read-only analysis)
    #[arg(long, value_enum)]
    pub permission_mode: Option<PermissionMode>,

    /// Allowed tools allowlist string
    #[arg(long = "allowedTools", value_name = "TOOLS")]
    pub allowed_tools: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// JSON schema (string) when using --output-format json
    #[arg(long, value_name = "SCHEMA")]
    pub json_schema: Option<String>,

    /// Append to claude's default system prompt
    #[arg(long, value_name = "TEXT")]
    pub append_system_prompt: Option<String>,

    /// Replace the system prompt
    #[arg(long, value_name = "TEXT")]
    pub system_prompt: Option<String>,

    /// Continue the most recent session
    #[arg(long = "continue")]
    pub continue_latest: bool,

    /// Resume a specific session ID
    #[arg(long, value_name = "SESSION_ID")]
    pub resume: Option<String>,

    /// Path to the claude binary [default: $CLAUDE_CODE_BIN, else /home/ubuntu/.local/bin/claude]
    #[arg(long, value_name = "PATH")]
    pub claude_bin: Option<PathBuf>,

    /// Working directory to run claude in (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Extra args passed to claude verbatim (after --)
    ///
    /// clap takes the first `--` as its end-of-options marker, so only that
    /// one is dropped; any later `--` reaches claude.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// Resolve the binary and turn the parsed flags into a request.
    pub fn into_request(self) -> InvocationRequest {
        InvocationRequest {
            claude_bin: resolve_binary_from_env(self.claude_bin.as_deref()),
            prompt: self.prompt,
            permission_mode: self.permission_mode,
            allowed_tools: self.allowed_tools,
            output_format: self.output_format,
            json_schema: self.json_schema,
            append_system_prompt: self.append_system_prompt,
            system_prompt: self.system_prompt,
            continue_latest: self.continue_latest,
            resume: self.resume,
            cwd: self.cwd,
            extra: self.extra,
        }
    }
}
