pub mod config;
pub mod domain;
pub(crate) mod error;
pub mod request;
pub mod response_vo;
pub mod service;

pub use error::business::notify::NotifyError;
pub use error::business::stake::StakeError;
pub use error::business::BusinessError;
pub use error::ServiceError;
