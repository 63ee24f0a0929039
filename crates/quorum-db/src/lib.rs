pub mod error;
pub mod migrations;
pub mod models;
pub mod repository;

#[cfg(test)]
mod fixtures;

pub use error::{DbError, Result};
pub use models::{FromRow, Record};
pub use repository::{
    FollowRepository, LikeRepository, QuestionRepository, ReplyRepository, UserRepository,
};
pub use rusqlite::ToSql;
pub use rusqlite::types::Value;

use rusqlite::{Connection, Params};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

/// Handle to the forum store. Owns a single connection; every call takes the
/// lock for exactly one statement (or one insert plus its rowid read).
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Opens the store at `path`. The schema is expected to exist already;
    /// see [`migrations::run`] to create it.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;

        info!("Database opened at {}", path.display());
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Self::from_connection(conn)
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DbError::ConnectionError(format!("DB lock poisoned: {}", e)))?;
        f(&conn)
    }

    /// Runs an arbitrary statement and returns every result row as a
    /// column-name to value mapping. Statements that return no rows yield an
    /// empty vec.
    pub fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Record>> {
        debug!(sql, "execute");
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let columns: Vec<String> =
                stmt.column_names().into_iter().map(String::from).collect();

            let mut rows = stmt.query(params)?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                let mut values = Vec::with_capacity(columns.len());
                for (idx, name) in columns.iter().enumerate() {
                    values.push((name.clone(), Value::from(row.get_ref(idx)?)));
                }
                records.push(Record::new(values));
            }
            Ok(records)
        })
    }

    /// Rowid of the most recent successful insert on this connection.
    /// Only meaningful immediately after the insert; another caller may
    /// insert in between once the lock is released.
    pub fn last_insert_id(&self) -> Result<i64> {
        self.with_conn(|conn| Ok(conn.last_insert_rowid()))
    }

    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(self)
    }

    pub fn questions(&self) -> QuestionRepository<'_> {
        QuestionRepository::new(self)
    }

    pub fn replies(&self) -> ReplyRepository<'_> {
        ReplyRepository::new(self)
    }

    pub fn follows(&self) -> FollowRepository<'_> {
        FollowRepository::new(self)
    }

    pub fn likes(&self) -> LikeRepository<'_> {
        LikeRepository::new(self)
    }

    pub(crate) fn fetch_all<T, P>(&self, sql: &str, params: P) -> Result<Vec<T>>
    where
        T: FromRow,
        P: Params,
    {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt
                .query_map(params, |row| T::from_row(row))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub(crate) fn fetch_optional<T, P>(&self, sql: &str, params: P) -> Result<Option<T>>
    where
        T: FromRow,
        P: Params,
    {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let mut rows = stmt.query(params)?;
            let first = match rows.next()? {
                Some(row) => Some(T::from_row(row)?),
                None => None,
            };
            Ok(first)
        })
    }

    pub(crate) fn fetch_scalar<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.with_conn(|conn| Ok(conn.query_row(sql, params, |row| row.get(0))?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seeded_db;

    #[test]
    fn execute_maps_columns_to_typed_values() {
        let db = seeded_db();
        db.execute("INSERT INTO users (name) VALUES (?1)", &[&"carol"]).unwrap();
        let id = db.last_insert_id().unwrap();

        let rows = db
            .execute("SELECT id, name, NULL AS absent FROM users WHERE id = ?1", &[&id])
            .unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.len(), 3);
        assert!(!row.is_empty());
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["id", "name", "absent"]);
        assert_eq!(row.get("id"), Some(&Value::Integer(id)));
        assert_eq!(row.get("name"), Some(&Value::Text("carol".into())));
        assert_eq!(row.get("absent"), Some(&Value::Null));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn execute_without_result_rows_is_empty() {
        let db = seeded_db();
        let rows = db
            .execute("UPDATE users SET name = name WHERE id = ?1", &[&-1i64])
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn malformed_sql_is_query_error() {
        let db = seeded_db();
        let err = db.execute("SELEKT * FROM users", &[]).unwrap_err();
        assert!(matches!(err, DbError::QueryError(_)));
    }

    #[test]
    fn foreign_keys_are_enforced() {
        let db = seeded_db();
        let err = db
            .execute(
                "INSERT INTO questions (title, body, author_id) VALUES ('t', 'b', ?1)",
                &[&9999i64],
            )
            .unwrap_err();
        assert!(matches!(err, DbError::QueryError(_)));
    }

    #[test]
    fn unreachable_path_is_connection_error() {
        let err = Database::open(Path::new("/nonexistent-dir/quorum/questions.db"))
            .err()
            .unwrap();
        assert!(matches!(err, DbError::ConnectionError(_)));
    }
}
