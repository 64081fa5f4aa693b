pub mod client;
pub mod errors;
pub mod request_builder;

pub use client::HttpClient;
pub use errors::TransportError;
pub use request_builder::ReqBuilder;
