//! Public message board endpoints.
//!
//! Anonymous posts never store the poster's name; responses mask them as
//! "익명". Replies are written by the admin UI after unlocking.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::domains::messages::data::{MessageData, MessageInput, ReplyInput};
use crate::domains::messages::models::Message;
use crate::kernel::stream_hub::ChangeOp;
use crate::server::app::AppState;
use crate::server::error::ApiError;

pub async fn list_messages(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<MessageData>>, ApiError> {
    let messages = Message::find_all(&state.db_pool).await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

pub async fn create_message(
    Extension(state): Extension<AppState>,
    Json(input): Json<MessageInput>,
) -> Result<(StatusCode, Json<MessageData>), ApiError> {
    if input.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message body is required".to_string()));
    }

    // Anonymous posts drop the name before it reaches the database.
    let name = if input.is_anonymous {
        None
    } else {
        input.name.as_deref().filter(|n| !n.trim().is_empty())
    };

    let message =
        Message::insert(name, &input.message, input.is_anonymous, &state.db_pool).await?;
    state.stream_hub.publish("messages", ChangeOp::Insert).await;

    Ok((StatusCode::CREATED, Json(message.into())))
}

pub async fn reply_message(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ReplyInput>,
) -> Result<Json<MessageData>, ApiError> {
    let message = Message::set_reply(id, &input.reply, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Message"))?;
    state.stream_hub.publish("messages", ChangeOp::Update).await;

    Ok(Json(message.into()))
}

pub async fn delete_message(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Message::delete(id, &state.db_pool).await? {
        return Err(ApiError::NotFound("Message"));
    }
    state.stream_hub.publish("messages", ChangeOp::Delete).await;

    Ok(StatusCode::NO_CONTENT)
}
