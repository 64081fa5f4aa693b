use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Transport(#[from] energy_transport::TransportError),
    #[error("rpc node return error: {0}")]
    RpcNode(String),
    #[error("utils error {0}")]
    Utils(#[from] energy_utils::error::Error),
    #[error("invalid resource type {0}")]
    InvalidResourceType(String),
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn is_network_error(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_network_error(),
            Error::Utils(e) => e.is_network_error(),
            _ => false,
        }
    }
}
