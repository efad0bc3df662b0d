use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("settings file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("settings parse error: {0}")]
    ParseError(String),

    #[error("settings validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("control socket not ready")]
    NotReady,

    #[error("control socket send failed: {0}")]
    SendFailed(String),

    #[error("control request encode error: {0}")]
    Encode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LiveError {
    #[error("live feed connect error: {0}")]
    ConnectFailed(String),

    #[error("live feed protocol error: {0}")]
    Protocol(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PeltError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Control(#[from] ControlError),

    #[error(transparent)]
    Live(#[from] LiveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
