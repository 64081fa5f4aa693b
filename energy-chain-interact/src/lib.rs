mod errors;
pub use errors::*;
pub mod tron;
pub mod types;
