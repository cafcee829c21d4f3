use stockfolio_core::CoreError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] stockfolio_core::ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("command error: {0}")]
    Command(String),

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Core(CoreError::Validation(_)) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Core(_) | Self::Command(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
