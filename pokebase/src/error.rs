use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("catalog is unavailable: {0}")]
    CatalogUnavailable(Cause),
    #[error("pokémon details are unavailable: {0}")]
    DetailUnavailable(Cause),
}

impl Error {
    pub fn cause(&self) -> &Cause {
        match self {
            Self::CatalogUnavailable(cause) | Self::DetailUnavailable(cause) => cause,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum Cause {
    #[error("request failed: {0}")]
    RequestFailed(Arc<reqwest::Error>),
    #[error("invalid response: {0}")]
    InvalidResponse(Arc<serde_json::Error>),
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("invalid pokémon id: {0:?}")]
    InvalidId(String),
    #[error("catalog limit must be positive")]
    InvalidLimit,
    #[error("expected 6 base stats, got {0}")]
    MissingStats(usize),
}

impl From<reqwest::Error> for Cause {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(Arc::new(error))
    }
}

impl From<serde_json::Error> for Cause {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidResponse(Arc::new(error))
    }
}
