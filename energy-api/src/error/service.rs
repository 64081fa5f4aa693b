#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Utils error: `{0}`")]
    Utils(#[from] energy_utils::error::Error),
    #[error("Transport error: `{0}`")]
    Transport(#[from] energy_transport::TransportError),
    #[error("Chain interact error: `{0}`")]
    ChainInteract(#[from] energy_chain_interact::Error),
    #[error("Database error: {0}")]
    Database(#[from] energy_database::Error),
    // 业务错误
    #[error("Business error: {0}")]
    Business(#[from] super::business::BusinessError),
    #[error("parameter error: {0}")]
    Parameter(String),
}

impl ServiceError {
    pub fn is_network_error(&self) -> bool {
        match self {
            ServiceError::Utils(err) => err.is_network_error(),
            ServiceError::Transport(err) => err.is_network_error(),
            ServiceError::ChainInteract(err) => err.is_network_error(),
            ServiceError::Database(err) => matches!(err, energy_database::Error::Utils(e) if e.is_network_error()),
            _ => false,
        }
    }
}
