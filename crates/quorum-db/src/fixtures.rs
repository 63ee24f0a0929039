//! Test helpers: an in-memory store with the schema applied, plus raw inserts
//! for the tables the repositories treat as read-only.

use quorum_types::{Question, User};

use crate::{Database, migrations};

pub fn seeded_db() -> Database {
    let db = Database::open_in_memory().unwrap();
    db.with_conn(migrations::run).unwrap();
    db
}

pub fn user(db: &Database, name: &str) -> i64 {
    db.execute("INSERT INTO users (name) VALUES (?1)", &[&name]).unwrap();
    db.last_insert_id().unwrap()
}

pub fn question(db: &Database, title: &str, author_id: i64) -> i64 {
    db.execute(
        "INSERT INTO questions (title, body, author_id) VALUES (?1, ?2, ?3)",
        &[&title, &format!("{title} body"), &author_id],
    )
    .unwrap();
    db.last_insert_id().unwrap()
}

pub fn reply(db: &Database, question_id: i64, author_id: i64, parent_id: Option<i64>) -> i64 {
    db.execute(
        "INSERT INTO replies (body, question_id, author_id, parent_id) VALUES ('re', ?1, ?2, ?3)",
        &[&question_id, &author_id, &parent_id],
    )
    .unwrap();
    db.last_insert_id().unwrap()
}

pub fn follow(db: &Database, question_id: i64, author_id: i64) -> i64 {
    db.execute(
        "INSERT INTO question_follows (question_id, author_id) VALUES (?1, ?2)",
        &[&question_id, &author_id],
    )
    .unwrap();
    db.last_insert_id().unwrap()
}

pub fn like(db: &Database, question_id: i64, author_id: i64) -> i64 {
    db.execute(
        "INSERT INTO question_likes (question_id, author_id) VALUES (?1, ?2)",
        &[&question_id, &author_id],
    )
    .unwrap();
    db.last_insert_id().unwrap()
}

/// Creates `n` fresh users who each like `question_id` once.
pub fn likes_from_new_users(db: &Database, question_id: i64, n: usize) {
    for i in 0..n {
        let fan = user(db, &format!("fan-{question_id}-{i}"));
        like(db, question_id, fan);
    }
}

pub fn follows_from_new_users(db: &Database, question_id: i64, n: usize) {
    for i in 0..n {
        let fan = user(db, &format!("follower-{question_id}-{i}"));
        follow(db, question_id, fan);
    }
}

pub fn question_ids(questions: Vec<Question>) -> Vec<i64> {
    questions.into_iter().map(|q| q.id).collect()
}

pub fn user_names(users: Vec<User>) -> Vec<String> {
    users.into_iter().map(|u| u.name).collect()
}
