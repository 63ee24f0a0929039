use axum::{Router, routing::get};

use crate::state::AppState;
use crate::{questions, records, replies, users};

pub fn router(state: AppState) -> Router {
    Router::new()
        // -- Users --
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/by-name/{name}", get(users::get_user_by_name))
        .route("/users/{id}", get(users::get_user).put(users::rename_user))
        .route("/users/{id}/questions", get(users::authored_questions))
        .route("/users/{id}/replies", get(users::authored_replies))
        .route("/users/{id}/followed", get(users::followed_questions))
        .route("/users/{id}/liked", get(users::liked_questions))
        .route("/users/{id}/karma", get(users::average_karma))
        // -- Questions --
        .route("/questions", get(questions::list_questions))
        .route("/questions/most-followed", get(questions::most_followed))
        .route("/questions/most-liked", get(questions::most_liked))
        .route("/questions/{id}", get(questions::get_question))
        .route("/questions/{id}/author", get(questions::question_author))
        .route("/questions/{id}/replies", get(questions::question_replies))
        .route("/questions/{id}/thread", get(questions::question_thread))
        .route("/questions/{id}/followers", get(questions::question_followers))
        .route("/questions/{id}/likers", get(questions::question_likers))
        .route("/questions/{id}/likes", get(questions::question_like_count))
        // -- Replies --
        .route("/replies/{id}", get(replies::get_reply))
        .route("/replies/{id}/author", get(replies::reply_author))
        .route("/replies/{id}/question", get(replies::reply_question))
        .route("/replies/{id}/parent", get(replies::reply_parent))
        .route("/replies/{id}/children", get(replies::reply_children))
        // -- Follows / Likes --
        .route("/follows/{id}", get(records::get_follow))
        .route("/likes/{id}", get(records::get_like))
        .with_state(state)
}
