use quorum_types::{Like, Question, User};
use tracing::debug;

use crate::{Database, DbError, Result};

/// Queries over `question_likes`. Same inner-join semantics as follows.
pub struct LikeRepository<'a> {
    db: &'a Database,
}

impl<'a> LikeRepository<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn find_by_id(&self, id: i64) -> Result<Like> {
        debug!(id, "likes.find_by_id");
        self.db
            .fetch_optional(
                "SELECT id, question_id, author_id FROM question_likes WHERE id = ?1",
                [id],
            )?
            .ok_or_else(|| DbError::not_found("Like", id))
    }

    pub fn likers_for_question(&self, question_id: i64) -> Result<Vec<User>> {
        debug!(question_id, "likes.likers_for_question");
        self.db.fetch_all(
            "SELECT u.id, u.name
             FROM question_likes l
             JOIN users u ON l.author_id = u.id
             WHERE l.question_id = ?1
             ORDER BY l.id",
            [question_id],
        )
    }

    /// Raw row count; zero when the question has no likes or does not exist.
    pub fn num_likes_for_question(&self, question_id: i64) -> Result<i64> {
        debug!(question_id, "likes.num_likes_for_question");
        self.db.fetch_scalar(
            "SELECT COUNT(id) FROM question_likes WHERE question_id = ?1",
            [question_id],
        )
    }

    pub fn liked_questions_for_user(&self, author_id: i64) -> Result<Vec<Question>> {
        debug!(author_id, "likes.liked_questions_for_user");
        self.db.fetch_all(
            "SELECT q.id, q.title, q.body, q.author_id
             FROM question_likes l
             JOIN questions q ON l.question_id = q.id
             WHERE l.author_id = ?1
             ORDER BY l.id",
            [author_id],
        )
    }

    /// Top `n` questions by like count, ties by question id.
    pub fn most_liked_questions(&self, n: u32) -> Result<Vec<Question>> {
        debug!(n, "likes.most_liked_questions");
        self.db.fetch_all(
            "SELECT q.id, q.title, q.body, q.author_id
             FROM question_likes l
             JOIN questions q ON l.question_id = q.id
             GROUP BY q.id
             ORDER BY COUNT(l.id) DESC, q.id ASC
             LIMIT ?1",
            [n],
        )
    }
}
