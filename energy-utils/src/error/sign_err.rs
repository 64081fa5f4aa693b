#[derive(Debug, thiserror::Error)]
pub enum SignError {
    #[error("message error {0}")]
    Message(String),
    #[error("key error {0}")]
    KeyError(String),
}
