//! Goals dashboard endpoints. Listing is most recently updated first.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::domains::goals::data::{GoalData, GoalInput};
use crate::domains::goals::models::Goal;
use crate::kernel::stream_hub::ChangeOp;
use crate::server::app::AppState;
use crate::server::error::ApiError;

pub async fn list_goals(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<GoalData>>, ApiError> {
    let goals = Goal::find_all(&state.db_pool).await?;
    Ok(Json(goals.into_iter().map(Into::into).collect()))
}

pub async fn create_goal(
    Extension(state): Extension<AppState>,
    Json(input): Json<GoalInput>,
) -> Result<(StatusCode, Json<GoalData>), ApiError> {
    if input.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Goal title is required".to_string()));
    }

    let goal = Goal::insert(&input.into(), &state.db_pool).await?;
    state.stream_hub.publish("goals", ChangeOp::Insert).await;

    Ok((StatusCode::CREATED, Json(goal.into())))
}

pub async fn update_goal(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<GoalInput>,
) -> Result<Json<GoalData>, ApiError> {
    let goal = Goal::update(id, &input.into(), &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Goal"))?;
    state.stream_hub.publish("goals", ChangeOp::Update).await;

    Ok(Json(goal.into()))
}

pub async fn delete_goal(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Goal::delete(id, &state.db_pool).await? {
        return Err(ApiError::NotFound("Goal"));
    }
    state.stream_hub.publish("goals", ChangeOp::Delete).await;

    Ok(StatusCode::NO_CONTENT)
}
