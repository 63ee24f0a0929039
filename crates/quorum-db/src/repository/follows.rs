use quorum_types::{Follow, Question, User};
use tracing::debug;

use crate::{Database, DbError, Result};

/// Queries over `question_follows`. Joins are inner joins, so a follow whose
/// user or question row is gone drops out of the results without an error.
pub struct FollowRepository<'a> {
    db: &'a Database,
}

impl<'a> FollowRepository<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn find_by_id(&self, id: i64) -> Result<Follow> {
        debug!(id, "follows.find_by_id");
        self.db
            .fetch_optional(
                "SELECT id, question_id, author_id FROM question_follows WHERE id = ?1",
                [id],
            )?
            .ok_or_else(|| DbError::not_found("Follow", id))
    }

    /// Top `n` questions by follow count. Equal counts are ordered by
    /// question id. Questions nobody follows are never returned.
    pub fn most_followed_questions(&self, n: u32) -> Result<Vec<Question>> {
        debug!(n, "follows.most_followed_questions");
        self.db.fetch_all(
            "SELECT q.id, q.title, q.body, q.author_id
             FROM question_follows f
             JOIN questions q ON f.question_id = q.id
             GROUP BY q.id
             ORDER BY COUNT(f.id) DESC, q.id ASC
             LIMIT ?1",
            [n],
        )
    }

    pub fn followers_for_question(&self, question_id: i64) -> Result<Vec<User>> {
        debug!(question_id, "follows.followers_for_question");
        self.db.fetch_all(
            "SELECT u.id, u.name
             FROM question_follows f
             JOIN users u ON f.author_id = u.id
             WHERE f.question_id = ?1
             ORDER BY f.id",
            [question_id],
        )
    }

    pub fn followed_questions_for_user(&self, author_id: i64) -> Result<Vec<Question>> {
        debug!(author_id, "follows.followed_questions_for_user");
        self.db.fetch_all(
            "SELECT q.id, q.title, q.body, q.author_id
             FROM question_follows f
             JOIN questions q ON f.question_id = q.id
             WHERE f.author_id = ?1
             ORDER BY f.id",
            [author_id],
        )
    }
}
