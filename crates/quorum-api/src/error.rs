use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quorum_db::DbError;
use quorum_types::api::ErrorResponse;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    Db(DbError),
    Internal,
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Db(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Db(err @ DbError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::Db(err @ DbError::NoQuestions { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            ApiError::Db(err) => {
                error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string()),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
