use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrambleError {
    #[error("gate error: {0}")]
    Gate(String),

    #[error("trap error: {0}")]
    Trap(String),

    #[error("loader error: {0}")]
    Loader(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BrambleResult<T> = Result<T, BrambleError>;
