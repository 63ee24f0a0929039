use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use quorum_types::api::{KarmaResponse, SaveUserRequest};
use quorum_types::{Question, Reply, User};

use crate::error::ApiError;
use crate::state::{AppState, with_db};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = with_db(&state, |db| db.users().all()).await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = with_db(&state, move |db| db.users().find_by_id(id)).await?;
    Ok(Json(user))
}

pub async fn get_user_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = with_db(&state, move |db| db.users().find_by_name(&name)).await?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<SaveUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = with_db(&state, move |db| {
        let mut user = User::new(req.name);
        db.users().save(&mut user)?;
        Ok(user)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn rename_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<SaveUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = with_db(&state, move |db| {
        let mut user = User {
            id: Some(id),
            name: req.name,
        };
        db.users().save(&mut user)?;
        Ok(user)
    })
    .await?;

    Ok(Json(user))
}

pub async fn authored_questions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = with_db(&state, move |db| db.users().authored_questions(id)).await?;
    Ok(Json(questions))
}

pub async fn authored_replies(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Reply>>, ApiError> {
    let replies = with_db(&state, move |db| db.users().authored_replies(id)).await?;
    Ok(Json(replies))
}

pub async fn followed_questions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = with_db(&state, move |db| db.users().followed_questions(id)).await?;
    Ok(Json(questions))
}

pub async fn liked_questions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = with_db(&state, move |db| db.users().liked_questions(id)).await?;
    Ok(Json(questions))
}

pub async fn average_karma(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<KarmaResponse>, ApiError> {
    let average_karma = with_db(&state, move |db| db.users().average_karma(id)).await?;
    Ok(Json(KarmaResponse {
        user_id: id,
        average_karma,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use quorum_types::User;
    use quorum_types::api::{ErrorResponse, KarmaResponse};

    use crate::test_support::{TestApp, get, send_json};

    #[tokio::test]
    async fn create_then_rename() {
        let app = TestApp::new();

        let (status, created): (_, User) =
            send_json(&app, "POST", "/users", r#"{"name":"alice"}"#).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created.id.unwrap();

        let (status, renamed): (_, User) =
            send_json(&app, "PUT", &format!("/users/{id}"), r#"{"name":"alicia"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(renamed.id, Some(id));

        let (status, fetched): (_, User) = get(&app, &format!("/users/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched.name, "alicia");

        let (_, by_name): (_, User) = get(&app, "/users/by-name/alicia").await;
        assert_eq!(by_name.id, Some(id));
    }

    #[tokio::test]
    async fn missing_user_is_404() {
        let app = TestApp::new();
        let (status, body): (_, ErrorResponse) = get(&app, "/users/41").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "User not found: 41");
    }

    #[tokio::test]
    async fn karma_without_questions_is_422() {
        let app = TestApp::new();
        let lurker = app.user("lurker");

        let (status, _): (_, ErrorResponse) = get(&app, &format!("/users/{lurker}/karma")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn karma_reports_mean() {
        let app = TestApp::new();
        let author = app.user("author");
        let fan = app.user("fan");
        let q = app.question("q", author);
        app.like(q, fan);
        app.question("q2", author);

        let (status, karma): (_, KarmaResponse) =
            get(&app, &format!("/users/{author}/karma")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(karma.user_id, author);
        assert_eq!(karma.average_karma, 0.5);
    }
}
