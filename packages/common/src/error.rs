use thiserror::Error;

/// UI-facing error type shared across handoff packages.
///
/// The artifact core never fails; these categories exist for the layers
/// around it (clipboard copy, file download, user-code syntax reporting,
/// theme loading).
#[derive(Error, Debug)]
pub enum HandoffError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Download error: {0}")]
    Download(String),

    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Theme error: {0}")]
    Theme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Category tag for routing errors to the right UI surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Clipboard,
    Download,
    Syntax,
    Theme,
    Io,
    Unknown,
}

impl HandoffError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HandoffError::Clipboard(_) => ErrorCategory::Clipboard,
            HandoffError::Download(_) => ErrorCategory::Download,
            HandoffError::Syntax(_) => ErrorCategory::Syntax,
            HandoffError::Theme(_) => ErrorCategory::Theme,
            HandoffError::Io(_) => ErrorCategory::Io,
            HandoffError::Unknown(_) => ErrorCategory::Unknown,
        }
    }
}

impl From<String> for HandoffError {
    fn from(s: String) -> Self {
        HandoffError::Unknown(s)
    }
}

impl From<&str> for HandoffError {
    fn from(s: &str) -> Self {
        HandoffError::Unknown(s.to_string())
    }
}
