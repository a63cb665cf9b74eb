use thiserror::Error;

#[derive(Error, Debug)]
pub enum DailybpyError {
    // External tool errors
    #[error("EXTERNAL_TOOL_MISSING: '{tool}' was not found on PATH")]
    ExternalToolMissing { tool: String },

    #[error("EXTERNAL_TOOL_FAILED: `{command}` exited with {}: {}", format_status(.status), .stderr.trim())]
    ExternalToolFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    // Release data errors
    #[error("RELEASE_DATA_INVALID: {context}: {reason}")]
    InvalidReleaseData { context: String, reason: String },

    #[error("INVALID_URL: '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    // Platform errors
    #[error("UNSUPPORTED_PLATFORM: no prebuilt wheel for {os} {arch}")]
    UnsupportedPlatform { os: String, arch: String },

    // Install errors
    #[error("INSTALL_ABORTED: {0}")]
    InstallAborted(String),

    #[error("VERIFICATION_FAILED: {0}")]
    VerificationFailed(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Index errors
    #[error("INDEX_WRITE_FAILED: {operation}: {source}")]
    IndexWriteFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

fn format_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

impl DailybpyError {
    /// Whether the process should keep going after reporting this error.
    pub fn is_warning(&self) -> bool {
        matches!(self, DailybpyError::VerificationFailed(_))
    }
}

pub type Result<T> = std::result::Result<T, DailybpyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_tool_failed_includes_stderr() {
        let err = DailybpyError::ExternalToolFailed {
            command: "gh release list".to_string(),
            status: Some(4),
            stderr: "authentication required\n".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("EXTERNAL_TOOL_FAILED"));
        assert!(msg.contains("status 4"));
        assert!(msg.contains("authentication required"));
        assert!(!msg.ends_with('\n'));
    }

    #[test]
    fn test_external_tool_failed_without_status() {
        let err = DailybpyError::ExternalToolFailed {
            command: "uv pip install".to_string(),
            status: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_only_verification_failure_is_warning() {
        assert!(DailybpyError::VerificationFailed("import failed".into()).is_warning());
        assert!(
            !DailybpyError::UnsupportedPlatform {
                os: "linux".into(),
                arch: "armv7".into()
            }
            .is_warning()
        );
        assert!(
            !DailybpyError::ExternalToolMissing {
                tool: "gh".into()
            }
            .is_warning()
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DailybpyError = io.into();
        assert!(err.to_string().starts_with("IO_ERROR"));
    }
}
