use thiserror::Error;
#[derive(Debug, Error)]
pub enum SimError {
    #[error("unknown profile: {0}")]
    UnknownProfile(String),
    #[error("duration for '{label}' must be greater than zero, got {duration_seconds}")]
    InvalidDuration { label: String, duration_seconds: u32 },
    #[error("invalid profile '{label}' on channel {channel}: {reason}")]
    InvalidProfile {
        label: String,
        channel: &'static str,
        reason: String,
    },
    #[error("{var} must be an unsigned integer, got '{value}'")]
    InvalidSeed {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("i/o failure")]
    Io(#[from] std::io::Error),
    #[error("failed to write csv")]
    Csv(#[from] csv::Error),
    #[error("invalid settings")]
    Config(#[from] serde_json::Error),
}
impl From<tempfile::PersistError> for SimError {
    fn from(value: tempfile::PersistError) -> Self {
        SimError::Io(value.error)
    }
}
