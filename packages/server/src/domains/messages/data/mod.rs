pub mod message;

pub use message::{MessageData, MessageInput, ReplyInput};
