#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("invalid header")]
    InvalidHeader,
    #[error("request error {0}")]
    ReqError(#[from] reqwest::Error),
}
