use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("unknown menu category: {0:?}")]
    UnknownCategory(String),

    #[error("failed to parse menu config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid menu config: {0}")]
    InvalidConfig(String),

    #[error("video playback rejected: {0}")]
    Playback(String),
}
