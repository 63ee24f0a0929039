use quorum_types::{Question, Reply, User};
use tracing::debug;

use crate::{Database, DbError, Result};

pub struct ReplyRepository<'a> {
    db: &'a Database,
}

impl<'a> ReplyRepository<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn find_by_id(&self, id: i64) -> Result<Reply> {
        debug!(id, "replies.find_by_id");
        self.db
            .fetch_optional(
                "SELECT id, body, question_id, author_id, parent_id FROM replies WHERE id = ?1",
                [id],
            )?
            .ok_or_else(|| DbError::not_found("Reply", id))
    }

    pub fn find_by_user_id(&self, author_id: i64) -> Result<Vec<Reply>> {
        debug!(author_id, "replies.find_by_user_id");
        self.db.fetch_all(
            "SELECT id, body, question_id, author_id, parent_id FROM replies
             WHERE author_id = ?1 ORDER BY id",
            [author_id],
        )
    }

    /// Every reply on the question, top-level and nested, as a flat list.
    pub fn find_by_question_id(&self, question_id: i64) -> Result<Vec<Reply>> {
        debug!(question_id, "replies.find_by_question_id");
        self.db.fetch_all(
            "SELECT id, body, question_id, author_id, parent_id FROM replies
             WHERE question_id = ?1 ORDER BY id",
            [question_id],
        )
    }

    pub fn author(&self, reply: &Reply) -> Result<User> {
        self.db.users().find_by_id(reply.author_id)
    }

    pub fn question(&self, reply: &Reply) -> Result<Question> {
        self.db.questions().find_by_id(reply.question_id)
    }

    /// `None` for a top-level reply. A `parent_id` that points at a missing
    /// row is reported as `NotFound`.
    pub fn parent_reply(&self, reply: &Reply) -> Result<Option<Reply>> {
        match reply.parent_id {
            Some(parent_id) => self.find_by_id(parent_id).map(Some),
            None => Ok(None),
        }
    }

    /// Direct children only. Use `quorum_types::tree::build_reply_tree` on
    /// [`Self::find_by_question_id`] for a whole thread.
    pub fn child_replies(&self, reply: &Reply) -> Result<Vec<Reply>> {
        debug!(parent_id = reply.id, "replies.child_replies");
        self.db.fetch_all(
            "SELECT id, body, question_id, author_id, parent_id FROM replies
             WHERE parent_id = ?1 ORDER BY id",
            [reply.id],
        )
    }
}
