pub mod account;
pub mod chain_parameter;
pub mod delegated;
pub mod transaction;
