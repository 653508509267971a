//! Meeting record endpoints. Listing is newest meeting date first.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::domains::meetings::data::{MeetingData, MeetingInput};
use crate::domains::meetings::models::Meeting;
use crate::kernel::stream_hub::ChangeOp;
use crate::server::app::AppState;
use crate::server::error::ApiError;

pub async fn list_meetings(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<MeetingData>>, ApiError> {
    let meetings = Meeting::find_all(&state.db_pool).await?;
    Ok(Json(meetings.into_iter().map(Into::into).collect()))
}

pub async fn create_meeting(
    Extension(state): Extension<AppState>,
    Json(input): Json<MeetingInput>,
) -> Result<(StatusCode, Json<MeetingData>), ApiError> {
    if input.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Meeting title is required".to_string()));
    }

    let meeting = Meeting::insert(&input.into(), &state.db_pool).await?;
    state.stream_hub.publish("meetings", ChangeOp::Insert).await;

    Ok((StatusCode::CREATED, Json(meeting.into())))
}

pub async fn update_meeting(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<MeetingInput>,
) -> Result<Json<MeetingData>, ApiError> {
    let meeting = Meeting::update(id, &input.into(), &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Meeting"))?;
    state.stream_hub.publish("meetings", ChangeOp::Update).await;

    Ok(Json(meeting.into()))
}

pub async fn delete_meeting(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Meeting::delete(id, &state.db_pool).await? {
        return Err(ApiError::NotFound("Meeting"));
    }
    state.stream_hub.publish("meetings", ChangeOp::Delete).await;

    Ok(StatusCode::NO_CONTENT)
}
