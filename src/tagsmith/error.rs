use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagsmithError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No active tag. Choose or create one with 'tagsmith use <tag>'")]
    NoActiveTag,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TagsmithError>;
