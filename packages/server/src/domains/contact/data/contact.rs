use serde::{Deserialize, Serialize};

use crate::domains::contact::models::contact::Contact as ContactModel;

/// Contact API data type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactData {
    pub email: String,
    pub address: String,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

impl From<ContactModel> for ContactData {
    fn from(contact: ContactModel) -> Self {
        Self {
            email: contact.email,
            address: contact.address,
            instagram: contact.instagram,
            facebook: contact.facebook,
            twitter: contact.twitter,
        }
    }
}

/// Request body for replacing the contact info.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactInput {
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}
