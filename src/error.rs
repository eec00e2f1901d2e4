use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HeadlessError {
    #[error("claude binary not found: {}", path.display())]
    BinaryNotFound { path: PathBuf },

    #[error("claude binary path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("failed to spawn {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl HeadlessError {
    /// Process exit code this error terminates the wrapper with.
    pub fn exit_code(&self) -> i32 {
        match self {
            HeadlessError::BinaryNotFound { .. } | HeadlessError::NonUtf8Path { .. } => 2,
            HeadlessError::Spawn { .. } => 1,
        }
    }

    /// Remediation line printed under the error, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            HeadlessError::BinaryNotFound { .. } | HeadlessError::NonUtf8Path { .. } => Some(format!(
                "Tip: set {}=/path/to/claude",
                crate::config::CLAUDE_BIN_ENV
            )),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HeadlessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_not_found_exits_with_two() {
        let err = HeadlessError::BinaryNotFound {
            path: PathBuf::from("/nope/claude"),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "claude binary not found: /nope/claude");
        assert_eq!(
            err.hint().as_deref(),
            Some("Tip: set CLAUDE_CODE_BIN=/path/to/claude")
        );
    }

    #[test]
    fn spawn_failure_exits_with_one() {
        let err = HeadlessError::Spawn {
            program: "script".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "failed to spawn script");
        assert!(err.hint().is_none());
    }
}
