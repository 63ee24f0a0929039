use rusqlite::Connection;
use tracing::info;

use crate::Result;

/// Creates the forum tables if they are missing. Never run implicitly by
/// [`crate::Database::open`].
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS questions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            body        TEXT NOT NULL,
            author_id   INTEGER NOT NULL REFERENCES users(id)
        );

        CREATE INDEX IF NOT EXISTS idx_questions_author
            ON questions(author_id);

        CREATE TABLE IF NOT EXISTS replies (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            body        TEXT NOT NULL,
            question_id INTEGER NOT NULL REFERENCES questions(id),
            author_id   INTEGER NOT NULL REFERENCES users(id),
            parent_id   INTEGER REFERENCES replies(id)
        );

        CREATE INDEX IF NOT EXISTS idx_replies_question
            ON replies(question_id);
        CREATE INDEX IF NOT EXISTS idx_replies_parent
            ON replies(parent_id);

        CREATE TABLE IF NOT EXISTS question_follows (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            question_id INTEGER NOT NULL REFERENCES questions(id),
            author_id   INTEGER NOT NULL REFERENCES users(id)
        );

        CREATE INDEX IF NOT EXISTS idx_follows_question
            ON question_follows(question_id);

        CREATE TABLE IF NOT EXISTS question_likes (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            question_id INTEGER NOT NULL REFERENCES questions(id),
            author_id   INTEGER NOT NULL REFERENCES users(id)
        );

        CREATE INDEX IF NOT EXISTS idx_likes_question
            ON question_likes(question_id);
        ",
    )?;

    info!("Database schema ready");
    Ok(())
}
