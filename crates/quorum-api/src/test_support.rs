use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use quorum_db::{Database, ToSql, migrations};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{AppState, AppStateInner, router};

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(migrations::run).unwrap();
        Self {
            state: Arc::new(AppStateInner { db }),
        }
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    fn insert(&self, sql: &str, params: &[&dyn ToSql]) -> i64 {
        self.state.db.execute(sql, params).unwrap();
        self.state.db.last_insert_id().unwrap()
    }

    pub fn user(&self, name: &str) -> i64 {
        self.insert("INSERT INTO users (name) VALUES (?1)", &[&name])
    }

    pub fn question(&self, title: &str, author_id: i64) -> i64 {
        self.insert(
            "INSERT INTO questions (title, body, author_id) VALUES (?1, 'body', ?2)",
            &[&title, &author_id],
        )
    }

    pub fn reply(&self, question_id: i64, author_id: i64, parent_id: Option<i64>) -> i64 {
        self.insert(
            "INSERT INTO replies (body, question_id, author_id, parent_id)
             VALUES ('re', ?1, ?2, ?3)",
            &[&question_id, &author_id, &parent_id],
        )
    }

    pub fn follow(&self, question_id: i64, author_id: i64) -> i64 {
        self.insert(
            "INSERT INTO question_follows (question_id, author_id) VALUES (?1, ?2)",
            &[&question_id, &author_id],
        )
    }

    pub fn like(&self, question_id: i64, author_id: i64) -> i64 {
        self.insert(
            "INSERT INTO question_likes (question_id, author_id) VALUES (?1, ?2)",
            &[&question_id, &author_id],
        )
    }
}

async fn call<T: DeserializeOwned>(app: &TestApp, request: Request<Body>) -> (StatusCode, T) {
    let response = app.router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get<T: DeserializeOwned>(app: &TestApp, uri: &str) -> (StatusCode, T) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    call(app, request).await
}

pub async fn send_json<T: DeserializeOwned>(
    app: &TestApp,
    method: &str,
    uri: &str,
    body: &str,
) -> (StatusCode, T) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    call(app, request).await
}
