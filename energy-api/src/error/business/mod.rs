pub mod notify;
pub mod stake;

#[derive(Debug, thiserror::Error)]
pub enum BusinessError {
    #[error("stake error: {0}")]
    Stake(#[from] stake::StakeError),
    #[error("notify error: {0}")]
    Notify(#[from] notify::NotifyError),
}

impl BusinessError {
    pub fn get_status_code(&self) -> i64 {
        match self {
            BusinessError::Stake(msg) => msg.get_status_code(),
            BusinessError::Notify(msg) => msg.get_status_code(),
        }
    }
}
