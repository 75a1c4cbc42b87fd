use super::categories::Categories;
use super::error::DbResult;
use super::migrations::ensure_schema;
use super::tasks::Tasks;
use rusqlite::Connection;
use std::path::Path;

/// Default database file, created in the working directory on first run.
pub const DB_FILE_NAME: &str = "tasks_db.db";

/// The single process-wide SQLite session.
///
/// Opening a `Db` turns on foreign-key enforcement (SQLite defaults it off per
/// connection) and brings the schema up to date. Both controllers borrow the
/// same instance for the lifetime of the application.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: impl AsRef<Path>) -> DbResult<Db> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        tracing::debug!(path = %path.display(), "opening database");
        Self::init(Connection::open(path)?)
    }

    pub fn in_memory() -> DbResult<Db> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(mut conn: Connection) -> DbResult<Db> {
        conn.pragma_update(None, "foreign_keys", true)?;
        ensure_schema(&mut conn)?;
        Ok(Db { conn })
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories::new(&self.conn)
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(&self.conn)
    }

    pub fn foreign_keys_enabled(&self) -> DbResult<bool> {
        Ok(self.conn.pragma_query_value(None, "foreign_keys", |row| row.get(0))?)
    }
}
