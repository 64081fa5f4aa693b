pub mod notification;
pub mod stake;
