pub mod delegate;
pub mod notification;
