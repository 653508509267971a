use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::members::models::member::{Member as MemberModel, NewMember};

/// Member API data type
///
/// Public API representation of a member (for JSON responses).
/// `image` here is the *resolved* display image: the stored value when set,
/// otherwise a name-matched file from the public image folder, otherwise null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberData {
    pub id: String,
    pub name: String,
    pub role: String,
    pub comment: Option<String>,
    pub image: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub display_order: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<MemberModel> for MemberData {
    fn from(member: MemberModel) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name,
            role: member.role,
            comment: member.comment,
            image: member.image,
            instagram: member.instagram,
            facebook: member.facebook,
            linkedin: member.linkedin,
            display_order: member.display_order,
            created_at: member.created_at,
        }
    }
}

/// Request body for creating or updating a member.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberInput {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

impl From<MemberInput> for NewMember {
    fn from(input: MemberInput) -> Self {
        Self {
            name: input.name,
            role: input.role,
            comment: input.comment,
            image: input.image,
            instagram: input.instagram,
            facebook: input.facebook,
            linkedin: input.linkedin,
            display_order: input.display_order,
        }
    }
}
