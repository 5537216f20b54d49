//! SQLite-backed storage for the feedback collection.
//!
//! `FeedbackStore` is the single handle to the database. It is opened once in
//! `main.rs`, checked with `ping` before the server binds, and shared with every
//! handler as `web::Data<FeedbackStore>`. The connection is not `Sync`, so it sits
//! behind a mutex and every call runs on Tokio's blocking pool.

pub mod feedbacks;
pub mod filter_sql;
pub mod schema;

use crate::error::ApiError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
pub struct FeedbackStore {
    conn: Arc<Mutex<Connection>>,
}

impl FeedbackStore {
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(schema::MIGRATION)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `op` against the connection on the blocking pool.
    pub async fn run<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let result = tokio::task::spawn_blocking(move || {
            // Statements are atomic; a poisoned connection is still consistent.
            let mut guard = conn.lock().unwrap_or_else(PoisonError::into_inner);
            op(&mut *guard)
        })
        .await?;
        Ok(result?)
    }

    /// Round-trips a trivial statement to prove the database is usable.
    pub async fn ping(&self) -> Result<(), ApiError> {
        self.run(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)))
            .await
            .map(|_| ())
    }
}
