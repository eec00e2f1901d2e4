use std::path::{Path, PathBuf};

/// Environment variable that overrides the claude binary location.
pub const CLAUDE_BIN_ENV: &str = "CLAUDE_CODE_BIN";

/// Where the claude installer puts the binary when nothing else is configured.
pub const DEFAULT_CLAUDE_BIN: &str = "/home/ubuntu/.local/bin/claude";

/// Pseudo-terminal helper searched for on `PATH` (util-linux `script`).
pub const PTY_HELPER: &str = "script";

/// Resolve the claude binary path.
///
/// First present value wins: the explicit override, then `CLAUDE_CODE_BIN`
/// as reported by `env`, then `default`. An empty environment value counts
/// as present, matching how a shell export of `CLAUDE_CODE_BIN=` behaves.
pub fn resolve_binary<F>(explicit: Option<&Path>, env: F, default: &str) -> PathBuf
where
    F: FnOnce(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    env(CLAUDE_BIN_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// `resolve_binary` against the real process environment.
pub fn resolve_binary_from_env(explicit: Option<&Path>) -> PathBuf {
    resolve_binary(explicit, |key| std::env::var(key).ok(), DEFAULT_CLAUDE_BIN)
}
