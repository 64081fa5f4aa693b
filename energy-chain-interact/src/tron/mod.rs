mod chain;
pub use chain::{StakeOperation, TronChain};

pub mod consts;
pub mod params;
pub mod protocol;
mod provider;
pub use provider::TronProvider;
mod tx_build;
