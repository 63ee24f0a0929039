use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use quorum_types::api::LikeCountResponse;
use quorum_types::tree::{ReplyNode, build_reply_tree};
use quorum_types::{Question, Reply, User};

use crate::error::ApiError;
use crate::state::{AppState, with_db};

const MAX_TOP_N: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    #[serde(default = "default_top_n")]
    pub n: u32,
}

fn default_top_n() -> u32 {
    10
}

pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = with_db(&state, |db| db.questions().all()).await?;
    Ok(Json(questions))
}

pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Question>, ApiError> {
    let question = with_db(&state, move |db| db.questions().find_by_id(id)).await?;
    Ok(Json(question))
}

pub async fn most_followed(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let n = query.n.min(MAX_TOP_N);
    let questions = with_db(&state, move |db| db.questions().most_followed(n)).await?;
    Ok(Json(questions))
}

pub async fn most_liked(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let n = query.n.min(MAX_TOP_N);
    let questions = with_db(&state, move |db| db.questions().most_liked(n)).await?;
    Ok(Json(questions))
}

pub async fn question_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let author = with_db(&state, move |db| {
        let questions = db.questions();
        let question = questions.find_by_id(id)?;
        questions.author(&question)
    })
    .await?;
    Ok(Json(author))
}

pub async fn question_replies(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Reply>>, ApiError> {
    let replies = with_db(&state, move |db| db.replies().find_by_question_id(id)).await?;
    Ok(Json(replies))
}

/// Replies nested under their parents. 404 when the question is missing.
pub async fn question_thread(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ReplyNode>>, ApiError> {
    let replies = with_db(&state, move |db| {
        let questions = db.questions();
        let question = questions.find_by_id(id)?;
        questions.replies(&question)
    })
    .await?;
    Ok(Json(build_reply_tree(replies)))
}

pub async fn question_followers(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = with_db(&state, move |db| db.follows().followers_for_question(id)).await?;
    Ok(Json(users))
}

pub async fn question_likers(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = with_db(&state, move |db| db.likes().likers_for_question(id)).await?;
    Ok(Json(users))
}

pub async fn question_like_count(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LikeCountResponse>, ApiError> {
    let likes = with_db(&state, move |db| db.likes().num_likes_for_question(id)).await?;
    Ok(Json(LikeCountResponse {
        question_id: id,
        likes,
    }))
}
