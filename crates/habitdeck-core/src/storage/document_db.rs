//! SQLite-backed untyped document store.
//!
//! Provides generic CRUD over schemaless JSON documents: list, get by id,
//! insert, delete. Bodies are stored verbatim with no schema beyond "a
//! non-empty JSON object"; deleting or fetching an unknown id is an
//! absence signal, not an error.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DocumentError;

use super::data_dir;

/// A stored document: an opaque JSON object plus assigned metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub body: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// SQLite database holding schemaless JSON documents.
pub struct DocumentDb {
    conn: Connection,
}

impl DocumentDb {
    /// Open the store at `~/.config/habitdeck/habitdeck.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, DocumentError> {
        let path = data_dir()
            .map_err(|e| DocumentError::QueryFailed(e.to_string()))?
            .join("habitdeck.db");
        let conn = Connection::open(&path).map_err(|source| DocumentError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self, DocumentError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS documents (
                id         TEXT PRIMARY KEY,
                body       TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_documents_created_at ON documents(created_at);",
        )
    }

    /// Insert a document, assigning a fresh id.
    ///
    /// # Errors
    /// Returns [`DocumentError::EmptyBody`] if the body is not a JSON
    /// object or has no fields, or an error if the insert fails.
    pub fn insert(&self, body: serde_json::Value) -> Result<Document, DocumentError> {
        match body.as_object() {
            Some(obj) if !obj.is_empty() => {}
            _ => return Err(DocumentError::EmptyBody),
        }

        let doc = Document {
            id: Uuid::new_v4().to_string(),
            body,
            created_at: Utc::now(),
        };
        self.conn.execute(
            "INSERT INTO documents (id, body, created_at) VALUES (?1, ?2, ?3)",
            params![
                doc.id,
                doc.body.to_string(),
                doc.created_at.to_rfc3339(),
            ],
        )?;
        Ok(doc)
    }

    /// List every stored document, oldest first.
    ///
    /// # Errors
    /// Returns an error if the query fails or a stored body is corrupt.
    pub fn list(&self) -> Result<Vec<Document>, DocumentError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, body, created_at FROM documents ORDER BY created_at ASC, id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut docs = Vec::new();
        for row in rows {
            let (id, body, created_at) = row?;
            docs.push(Self::hydrate(id, &body, &created_at)?);
        }
        Ok(docs)
    }

    /// Fetch one document by id. Unknown id returns `None`.
    ///
    /// # Errors
    /// Returns an error if the query fails or the stored body is corrupt.
    pub fn get(&self, id: &str) -> Result<Option<Document>, DocumentError> {
        let row = self
            .conn
            .query_row(
                "SELECT body, created_at FROM documents WHERE id = ?1",
                params![id],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        match row {
            Some((body, created_at)) => Ok(Some(Self::hydrate(id.to_string(), &body, &created_at)?)),
            None => Ok(None),
        }
    }

    /// Delete one document by id. Returns `false` if the id was unknown.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub fn delete(&self, id: &str) -> Result<bool, DocumentError> {
        let changed = self
            .conn
            .execute("DELETE FROM documents WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    fn hydrate(id: String, body: &str, created_at: &str) -> Result<Document, DocumentError> {
        let body = serde_json::from_str(body).map_err(|source| DocumentError::CorruptBody {
            id: id.clone(),
            source,
        })?;
        let created_at = DateTime::parse_from_rfc3339(created_at)
            .map_err(|e| DocumentError::QueryFailed(e.to_string()))?
            .with_timezone(&Utc);
        Ok(Document {
            id,
            body,
            created_at,
        })
    }
}
