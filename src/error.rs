use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum FbauthError {
    #[error("missing facebook token")]
    MissingToken,

    #[error("missing facebook id")]
    MissingId,

    #[error("missing fields")]
    MissingFields,

    #[error("failed to parse url: {0}")]
    UrlBuild(#[from] url::ParseError),

    #[error("invalid app secret")]
    InvalidSecret,

    #[error("failed to request facebook graph api: {0}")]
    Network(#[source] BoxError),

    #[error("failed to decode fb auth response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("facebook error: {0}")]
    Facebook(serde_json::Value),

    #[error("facebook id mismatch, {received} != {expected}")]
    IdentityMismatch {
        received: serde_json::Value,
        expected: String,
    },

    #[error("failed to fetch facebook profile image: {0}")]
    ImageFetch(#[source] BoxError),
}
