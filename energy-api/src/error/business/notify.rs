#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification config disabled")]
    ConfigDisabled,
    #[error("hourly send limit reached for chat {0}")]
    RateLimited(String),
    #[error("empty recipient list")]
    NoRecipients,
}

impl NotifyError {
    pub(crate) fn get_status_code(&self) -> i64 {
        match self {
            NotifyError::ConfigDisabled => 4100,
            NotifyError::RateLimited(_) => 4101,
            NotifyError::NoRecipients => 4102,
        }
    }
}
