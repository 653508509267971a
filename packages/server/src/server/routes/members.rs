//! Members gallery endpoints.
//!
//! Listing applies the presentation-order resolution (client ordering map,
//! then display_order, then creation time) and resolves each member's display
//! image against the public image folder.

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::domains::members::data::{MemberData, MemberInput};
use crate::domains::members::models::Member;
use crate::domains::members::ordering;
use crate::kernel::stream_hub::ChangeOp;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct MembersQuery {
    /// JSON object of member id -> rank, mirroring the UI's localStorage map.
    pub order: Option<String>,
}

pub async fn list_members(
    Extension(state): Extension<AppState>,
    Query(query): Query<MembersQuery>,
) -> Result<Json<Vec<MemberData>>, ApiError> {
    let mut members = Member::find_all(&state.db_pool).await?;

    // A malformed map falls back to creation order, not display_order.
    ordering::sort_members(&mut members, query.order.as_deref());

    let data = members
        .into_iter()
        .map(|member| {
            let mut data = MemberData::from(member);
            if data.image.is_none() {
                data.image = state.images.find_matching_image(&data.name);
            }
            data
        })
        .collect();

    Ok(Json(data))
}

pub async fn create_member(
    Extension(state): Extension<AppState>,
    Json(input): Json<MemberInput>,
) -> Result<(StatusCode, Json<MemberData>), ApiError> {
    if input.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Member name is required".to_string()));
    }

    let member = Member::insert(&input.into(), &state.db_pool).await?;
    state.stream_hub.publish("members", ChangeOp::Insert).await;

    Ok((StatusCode::CREATED, Json(member.into())))
}

pub async fn update_member(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<MemberInput>,
) -> Result<Json<MemberData>, ApiError> {
    let member = Member::update(id, &input.into(), &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Member"))?;
    state.stream_hub.publish("members", ChangeOp::Update).await;

    Ok(Json(member.into()))
}

pub async fn delete_member(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Member::delete(id, &state.db_pool).await? {
        return Err(ApiError::NotFound("Member"));
    }
    state.stream_hub.publish("members", ChangeOp::Delete).await;

    Ok(StatusCode::NO_CONTENT)
}
