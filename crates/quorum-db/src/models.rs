//! Typed row decoders. Each entity reads its columns by name with a declared
//! type; a NULL or wrongly typed column fails the whole query.

use quorum_types::{Follow, Like, Question, Reply, User};
use rusqlite::Row;
use rusqlite::types::Value;

pub trait FromRow: Sized {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl FromRow for User {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(User {
            id: Some(row.get("id")?),
            name: row.get("name")?,
        })
    }
}

impl FromRow for Question {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Question {
            id: row.get("id")?,
            title: row.get("title")?,
            body: row.get("body")?,
            author_id: row.get("author_id")?,
        })
    }
}

impl FromRow for Reply {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Reply {
            id: row.get("id")?,
            body: row.get("body")?,
            question_id: row.get("question_id")?,
            author_id: row.get("author_id")?,
            parent_id: row.get("parent_id")?,
        })
    }
}

impl FromRow for Follow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Follow {
            id: row.get("id")?,
            question_id: row.get("question_id")?,
            author_id: row.get("author_id")?,
        })
    }
}

impl FromRow for Like {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Like {
            id: row.get("id")?,
            question_id: row.get("question_id")?,
            author_id: row.get("author_id")?,
        })
    }
}

/// One untyped result row from [`crate::Database::execute`], in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<(String, Value)>,
}

impl Record {
    pub(crate) fn new(values: Vec<(String, Value)>) -> Self {
        Self { values }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seeded_db;
    use crate::DbError;

    #[test]
    fn null_text_column_fails_decode() {
        let db = seeded_db();
        let err = db
            .fetch_all::<User, _>("SELECT 1 AS id, NULL AS name", [])
            .unwrap_err();
        assert!(matches!(err, DbError::QueryError(_)));
    }

    #[test]
    fn text_in_integer_column_fails_decode() {
        let db = seeded_db();
        let err = db
            .fetch_all::<Follow, _>("SELECT 'x' AS id, 1 AS question_id, 1 AS author_id", [])
            .unwrap_err();
        assert!(matches!(err, DbError::QueryError(_)));
    }

    #[test]
    fn null_parent_decodes_as_none() {
        let db = seeded_db();
        let rows = db
            .fetch_all::<Reply, _>(
                "SELECT 1 AS id, 'b' AS body, 1 AS question_id, 1 AS author_id, NULL AS parent_id",
                [],
            )
            .unwrap();
        assert_eq!(rows[0].parent_id, None);
        assert!(rows[0].is_top_level());
    }
}
