use std::path::PathBuf;

use clap::ValueEnum;

/// How much autonomy claude gets to act without confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PermissionMode {
    /// Read-only analysis; claude proposes but does not act.
    Plan,
    /// Edits are accepted without prompting.
    AutoAccept,
    /// Claude's interactive default.
    Normal,
}

impl std::fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionMode::Plan => write!(f, "plan"),
            PermissionMode::AutoAccept => write!(f, "auto-accept"),
            PermissionMode::Normal => write!(f, "normal"),
        }
    }
}

/// Output format of a headless (`-p`) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    StreamJson,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::StreamJson => write!(f, "stream-json"),
        }
    }
}

/// One run of claude, as requested on our command line.
///
/// Built once from the parsed options, turned into an argv by
/// [`crate::command::build_command`], then dropped when the child exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub claude_bin: PathBuf,
    pub prompt: Option<String>,
    pub permission_mode: Option<PermissionMode>,
    pub allowed_tools: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub json_schema: Option<String>,
    pub append_system_prompt: Option<String>,
    pub system_prompt: Option<String>,
    /// Continue the most recent session.
    pub continue_latest: bool,
    /// Resume a specific session id. Not checked against `continue_latest`.
    pub resume: Option<String>,
    pub cwd: Option<PathBuf>,
    /// Raw trailing arguments, leading `--` already stripped.
    pub extra: Vec<String>,
}

impl InvocationRequest {
    /// A request that runs `claude_bin` with no options.
    pub fn new(claude_bin: impl Into<PathBuf>) -> Self {
        Self {
            claude_bin: claude_bin.into(),
            prompt: None,
            permission_mode: None,
            allowed_tools: None,
            output_format: None,
            json_schema: None,
            append_system_prompt: None,
            system_prompt: None,
            continue_latest: false,
            resume: None,
            cwd: None,
            extra: Vec::new(),
        }
    }
}
