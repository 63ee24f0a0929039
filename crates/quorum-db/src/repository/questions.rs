use quorum_types::{Question, Reply, User};
use tracing::debug;

use crate::{Database, DbError, Result};

pub struct QuestionRepository<'a> {
    db: &'a Database,
}

impl<'a> QuestionRepository<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn all(&self) -> Result<Vec<Question>> {
        debug!("questions.all");
        self.db.fetch_all("SELECT id, title, body, author_id FROM questions", [])
    }

    pub fn find_by_id(&self, id: i64) -> Result<Question> {
        debug!(id, "questions.find_by_id");
        self.db
            .fetch_optional(
                "SELECT id, title, body, author_id FROM questions WHERE id = ?1",
                [id],
            )?
            .ok_or_else(|| DbError::not_found("Question", id))
    }

    pub fn find_by_author_id(&self, author_id: i64) -> Result<Vec<Question>> {
        debug!(author_id, "questions.find_by_author_id");
        self.db.fetch_all(
            "SELECT id, title, body, author_id FROM questions WHERE author_id = ?1 ORDER BY id",
            [author_id],
        )
    }

    pub fn most_followed(&self, n: u32) -> Result<Vec<Question>> {
        self.db.follows().most_followed_questions(n)
    }

    pub fn most_liked(&self, n: u32) -> Result<Vec<Question>> {
        self.db.likes().most_liked_questions(n)
    }

    pub fn author(&self, question: &Question) -> Result<User> {
        self.db.users().find_by_id(question.author_id)
    }

    pub fn replies(&self, question: &Question) -> Result<Vec<Reply>> {
        self.db.replies().find_by_question_id(question.id)
    }

    pub fn followers(&self, question: &Question) -> Result<Vec<User>> {
        self.db.follows().followers_for_question(question.id)
    }

    pub fn likers(&self, question: &Question) -> Result<Vec<User>> {
        self.db.likes().likers_for_question(question.id)
    }

    pub fn num_likes(&self, question: &Question) -> Result<i64> {
        self.db.likes().num_likes_for_question(question.id)
    }
}
