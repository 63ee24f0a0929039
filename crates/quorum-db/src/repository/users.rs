use quorum_types::{Question, Reply, User};
use tracing::debug;

use crate::{Database, DbError, Result};

pub struct UserRepository<'a> {
    db: &'a Database,
}

impl<'a> UserRepository<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn all(&self) -> Result<Vec<User>> {
        debug!("users.all");
        self.db.fetch_all("SELECT id, name FROM users", [])
    }

    pub fn find_by_id(&self, id: i64) -> Result<User> {
        debug!(id, "users.find_by_id");
        self.db
            .fetch_optional("SELECT id, name FROM users WHERE id = ?1", [id])?
            .ok_or_else(|| DbError::not_found("User", id))
    }

    /// Names are not unique; the lowest id wins.
    pub fn find_by_name(&self, name: &str) -> Result<User> {
        debug!(name, "users.find_by_name");
        self.db
            .fetch_optional(
                "SELECT id, name FROM users WHERE name = ?1 ORDER BY id LIMIT 1",
                [name],
            )?
            .ok_or_else(|| DbError::not_found("User", name))
    }

    pub fn authored_questions(&self, user_id: i64) -> Result<Vec<Question>> {
        self.db.questions().find_by_author_id(user_id)
    }

    pub fn authored_replies(&self, user_id: i64) -> Result<Vec<Reply>> {
        self.db.replies().find_by_user_id(user_id)
    }

    pub fn followed_questions(&self, user_id: i64) -> Result<Vec<Question>> {
        self.db.follows().followed_questions_for_user(user_id)
    }

    pub fn liked_questions(&self, user_id: i64) -> Result<Vec<Question>> {
        self.db.likes().liked_questions_for_user(user_id)
    }

    /// Mean like count across the user's questions. Issues one count query
    /// per question, so concurrent likes can skew the result.
    pub fn average_karma(&self, user_id: i64) -> Result<f64> {
        let questions = self.authored_questions(user_id)?;
        if questions.is_empty() {
            return Err(DbError::NoQuestions { user_id });
        }

        let likes = self.db.likes();
        let mut total = 0i64;
        for question in &questions {
            total += likes.num_likes_for_question(question.id)?;
        }

        Ok(total as f64 / questions.len() as f64)
    }

    /// Inserts a new row when `user.id` is unset and fills it in from the
    /// store; otherwise renames the existing row.
    pub fn save(&self, user: &mut User) -> Result<()> {
        match user.id {
            Some(id) => {
                debug!(id, name = %user.name, "users.update");
                let changed = self.db.with_conn(|conn| {
                    Ok(conn.execute("UPDATE users SET name = ?1 WHERE id = ?2", (&user.name, id))?)
                })?;
                if changed == 0 {
                    return Err(DbError::not_found("User", id));
                }
            }
            None => {
                let id = self.db.with_conn(|conn| {
                    conn.execute("INSERT INTO users (name) VALUES (?1)", [&user.name])?;
                    Ok(conn.last_insert_rowid())
                })?;
                debug!(id, name = %user.name, "users.insert");
                user.id = Some(id);
            }
        }
        Ok(())
    }
}
