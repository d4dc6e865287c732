//! Conversation domain module.
//!
//! - `message`: Message types (`Message`, `MessageAuthor`)
//! - `log`: Append-only conversation log (`ConversationLog`)

mod log;
mod message;

pub use log::ConversationLog;
pub use message::{Message, MessageAuthor};
