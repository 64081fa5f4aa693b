mod bulk;
pub use bulk::{BulkSendReport, BulkSender, Recipient};
mod push;
pub use push::{NotificationPush, TelegramPush};
mod template;
pub use template::render_template;
