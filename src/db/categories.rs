use super::error::DbResult;
use crate::libs::category::Category;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_CATEGORY: &str = "INSERT INTO categories (title) VALUES (?1)";
const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE title = ?1";
const SELECT_CATEGORIES: &str = "SELECT id, title FROM categories ORDER BY id";
const SELECT_ID_BY_TITLE: &str = "SELECT id FROM categories WHERE title = ?1";
const COUNT_TASKS: &str = "
    SELECT COUNT(*) FROM tasks
    JOIN categories ON tasks.category_id = categories.id
    WHERE categories.title = ?1
";

pub struct Categories<'a> {
    conn: &'a Connection,
}

impl<'a> Categories<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn list(&self) -> DbResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(SELECT_CATEGORIES)?;
        let category_iter = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        })?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }
        Ok(categories)
    }

    pub fn titles(&self) -> DbResult<Vec<String>> {
        Ok(self.list()?.into_iter().map(|c| c.title).collect())
    }

    /// Fails with a constraint violation when the title is taken.
    pub fn add(&self, title: &str) -> DbResult<i64> {
        self.conn.execute(INSERT_CATEGORY, params![title])?;
        tracing::debug!(title, "category inserted");
        Ok(self.conn.last_insert_rowid())
    }

    /// Tasks of the category go with it through `ON DELETE CASCADE`.
    pub fn delete(&self, title: &str) -> DbResult<usize> {
        let affected = self.conn.execute(DELETE_CATEGORY, params![title])?;
        tracing::debug!(title, affected, "category deleted");
        Ok(affected)
    }

    pub fn find_id_by_title(&self, title: &str) -> DbResult<Option<i64>> {
        Ok(self
            .conn
            .query_row(SELECT_ID_BY_TITLE, params![title], |row| row.get(0))
            .optional()?)
    }

    pub fn count_tasks(&self, title: &str) -> DbResult<usize> {
        let count: i64 = self.conn.query_row(COUNT_TASKS, params![title], |row| row.get(0))?;
        Ok(count as usize)
    }
}
