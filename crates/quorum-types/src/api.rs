use serde::{Deserialize, Serialize};

// -- Users --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveUserRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KarmaResponse {
    pub user_id: i64,
    pub average_karma: f64,
}

// -- Questions --

#[derive(Debug, Serialize, Deserialize)]
pub struct LikeCountResponse {
    pub question_id: i64,
    pub likes: i64,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
