/// All errors that can occur when assembling or invoking the agent team.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid agent definition: {0}")]
    InvalidDefinition(String),

    #[error("missing dependency for root agent: {name}")]
    MissingDependency { name: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
