pub mod notify;
pub mod stake;
pub mod task;
