//! Data-access gateway over SQLite.
//!
//! A thin pass-through to `rusqlite`: schema and index creation plus the
//! batch CRUD statements the harness times. The gateway owns a single
//! connection; every multi-row mutation runs inside one explicit
//! transaction.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::fixtures::AuthorSpec;

/// A row from the `author` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRow {
    pub id: i64,
    pub name: String,
}

/// Gateway to the benchmark database.
pub struct Gateway {
    conn: Connection,
}

impl Gateway {
    /// Open a gateway against a database file, creating the schema if
    /// needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::init(Connection::open(path)?)
    }

    /// Open a gateway against an in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Open a gateway for the configured database (file or in-memory).
    pub fn from_config(config: &BenchConfig) -> Result<Self> {
        match &config.database_path {
            Some(path) => Self::open(path),
            None => Self::open_in_memory(),
        }
    }

    fn init(conn: Connection) -> Result<Self> {
        // Cascade from author to book is enforced at the schema level, so
        // batch deletes never leave orphaned books behind.
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS author (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS book (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                author_id INTEGER NOT NULL
                    REFERENCES author(id) ON DELETE CASCADE
            );
            "#,
        )?;
        Ok(Self { conn })
    }

    /// Create secondary indexes on `author.name` and `book.title`.
    ///
    /// Duplicate-index handling is delegated to SQLite via `IF NOT EXISTS`.
    pub fn create_indexes(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_author_name ON author(name);
            CREATE INDEX IF NOT EXISTS idx_book_title ON book(title);
            "#,
        )?;
        Ok(())
    }

    /// Delete all books then all authors in one transaction.
    ///
    /// Children go first to satisfy the foreign-key relationship. Calling
    /// this on empty tables is a no-op.
    pub fn clear_tables(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM book", [])?;
        tx.execute("DELETE FROM author", [])?;
        tx.commit()?;
        Ok(())
    }

    /// Bulk-insert authors, each with its single owned book, in one
    /// transaction.
    pub fn insert_rows(&mut self, authors: &[AuthorSpec]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut author_stmt = tx.prepare("INSERT INTO author (name) VALUES (?1)")?;
            let mut book_stmt =
                tx.prepare("INSERT INTO book (title, author_id) VALUES (?1, ?2)")?;

            for author in authors {
                author_stmt.execute(params![author.name])?;
                let author_id = tx.last_insert_rowid();
                book_stmt.execute(params![author.book_title, author_id])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Retrieve up to `limit` authors whose name matches the
    /// `Author` prefix.
    pub fn select_rows(&self, limit: usize) -> Result<Vec<AuthorRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM author WHERE name LIKE 'Author%' LIMIT ?1")?;

        let rows = stmt
            .query_map([limit as i64], |row| {
                Ok(AuthorRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Rename up to `limit` authors to `new_name` in a single batch
    /// statement. Returns the number of rows changed.
    pub fn update_rows(&self, limit: usize, new_name: &str) -> Result<usize> {
        let changed = self.conn.execute(
            "UPDATE author SET name = ?1 \
             WHERE id IN (SELECT id FROM author LIMIT ?2)",
            params![new_name, limit as i64],
        )?;
        Ok(changed)
    }

    /// Delete up to `limit` authors in a single batch statement; their
    /// books cascade. Returns the number of authors deleted.
    pub fn delete_rows(&self, limit: usize) -> Result<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM author WHERE id IN (SELECT id FROM author LIMIT ?1)",
            [limit as i64],
        )?;
        Ok(deleted)
    }

    /// Total rows in the `author` table.
    pub fn author_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM author", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Total rows in the `book` table.
    pub fn book_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM book", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Number of distinct authors referenced by at least one book.
    pub fn linked_author_count(&self) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(DISTINCT author_id) FROM book",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
