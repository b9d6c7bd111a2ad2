mod error;
mod message;
mod notification;
mod priority;

pub use error::{Error, Result};
pub use message::PushMessage;
pub use notification::Notification;
pub use priority::Priority;
