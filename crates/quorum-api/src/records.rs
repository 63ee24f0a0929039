use axum::{
    Json,
    extract::{Path, State},
};

use quorum_types::{Follow, Like};

use crate::error::ApiError;
use crate::state::{AppState, with_db};

pub async fn get_follow(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Follow>, ApiError> {
    let follow = with_db(&state, move |db| db.follows().find_by_id(id)).await?;
    Ok(Json(follow))
}

pub async fn get_like(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Like>, ApiError> {
    let like = with_db(&state, move |db| db.likes().find_by_id(id)).await?;
    Ok(Json(like))
}
