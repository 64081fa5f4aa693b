#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("address convert failed: {0}")]
    AddressConvertFailed(String),
    #[error("amount convert failed: {0}")]
    AmountConvertFailed(String),
}
