use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// The store could not be opened or the connection is unusable.
    #[error("Database connection failed: {0}")]
    ConnectionError(String),

    /// Malformed SQL, a constraint violation, or a row that did not decode.
    #[error("Database query failed: {0}")]
    QueryError(String),

    /// A single-row lookup matched nothing.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("User {user_id} has not authored any questions")]
    NoQuestions { user_id: i64 },
}

impl DbError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        DbError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::CannotOpen | ErrorCode::NotADatabase | ErrorCode::PermissionDenied) => {
                DbError::ConnectionError(err.to_string())
            }
            _ => DbError::QueryError(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
