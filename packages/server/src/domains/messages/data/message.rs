use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::messages::models::message::Message as MessageModel;

/// Display name shown for anonymous posters.
pub const ANONYMOUS_NAME: &str = "익명";

/// Message API data type
///
/// Anonymous messages always present `name` as "익명", regardless of what
/// (if anything) was stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageData {
    pub id: String,
    pub name: String,
    pub message: String,
    pub is_anonymous: bool,
    pub reply: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MessageModel> for MessageData {
    fn from(message: MessageModel) -> Self {
        let name = if message.is_anonymous {
            ANONYMOUS_NAME.to_string()
        } else {
            message.name.unwrap_or_else(|| ANONYMOUS_NAME.to_string())
        };

        Self {
            id: message.id.to_string(),
            name,
            message: message.message,
            is_anonymous: message.is_anonymous,
            reply: message.admin_reply,
            created_at: message.created_at,
        }
    }
}

/// Request body for posting a message.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageInput {
    #[serde(default)]
    pub name: Option<String>,
    pub message: String,
    #[serde(default)]
    pub is_anonymous: bool,
}

/// Request body for the admin reply endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyInput {
    pub reply: String,
}
