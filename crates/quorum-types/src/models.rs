use serde::{Deserialize, Serialize};

/// A forum member. `id` is `None` until the user has been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
}

/// A reply on a question. Top-level replies have no `parent_id`.
/// A parent is expected to belong to the same question; the store does not check this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    pub body: String,
    pub question_id: i64,
    pub author_id: i64,
    pub parent_id: Option<i64>,
}

impl Reply {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// One user following one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    pub id: i64,
    pub question_id: i64,
    pub author_id: i64,
}

/// One user liking one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub question_id: i64,
    pub author_id: i64,
}
