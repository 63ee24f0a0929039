use axum::{
    Json,
    extract::{Path, State},
};

use quorum_types::{Question, Reply, User};

use crate::error::ApiError;
use crate::state::{AppState, with_db};

pub async fn get_reply(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Reply>, ApiError> {
    let reply = with_db(&state, move |db| db.replies().find_by_id(id)).await?;
    Ok(Json(reply))
}

pub async fn reply_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let author = with_db(&state, move |db| {
        let replies = db.replies();
        let reply = replies.find_by_id(id)?;
        replies.author(&reply)
    })
    .await?;
    Ok(Json(author))
}

pub async fn reply_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Question>, ApiError> {
    let question = with_db(&state, move |db| {
        let replies = db.replies();
        let reply = replies.find_by_id(id)?;
        replies.question(&reply)
    })
    .await?;
    Ok(Json(question))
}

/// `null` for a top-level reply.
pub async fn reply_parent(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Reply>>, ApiError> {
    let parent = with_db(&state, move |db| {
        let replies = db.replies();
        let reply = replies.find_by_id(id)?;
        replies.parent_reply(&reply)
    })
    .await?;
    Ok(Json(parent))
}

pub async fn reply_children(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Reply>>, ApiError> {
    let children = with_db(&state, move |db| {
        let replies = db.replies();
        let reply = replies.find_by_id(id)?;
        replies.child_replies(&reply)
    })
    .await?;
    Ok(Json(children))
}
