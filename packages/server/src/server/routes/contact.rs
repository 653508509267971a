//! Contact info endpoints (singleton record).

use axum::extract::Extension;
use axum::Json;

use crate::domains::contact::data::{ContactData, ContactInput};
use crate::domains::contact::models::Contact;
use crate::kernel::stream_hub::ChangeOp;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Returns the contact record, or empty defaults if none has been saved yet.
pub async fn get_contact(
    Extension(state): Extension<AppState>,
) -> Result<Json<ContactData>, ApiError> {
    let contact = Contact::get(&state.db_pool).await?;
    let data = contact.map(ContactData::from).unwrap_or(ContactData {
        email: String::new(),
        address: String::new(),
        instagram: None,
        facebook: None,
        twitter: None,
    });

    Ok(Json(data))
}

pub async fn put_contact(
    Extension(state): Extension<AppState>,
    Json(input): Json<ContactInput>,
) -> Result<Json<ContactData>, ApiError> {
    let contact = Contact::upsert(
        &input.email,
        &input.address,
        input.instagram.as_deref(),
        input.facebook.as_deref(),
        input.twitter.as_deref(),
        &state.db_pool,
    )
    .await?;
    state.stream_hub.publish("contact", ChangeOp::Update).await;

    Ok(Json(contact.into()))
}
