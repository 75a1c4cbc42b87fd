use super::error::DbResult;
use crate::libs::task::{Task, TaskFilter};
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, category_id) VALUES (?1, ?2, ?3)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE title = ?1";
const UPDATE_DONE: &str = "UPDATE tasks SET done = ?2 WHERE title = ?1";
const SELECT_TASKS: &str = "SELECT tasks.id, tasks.title, tasks.description, tasks.done, tasks.category_id FROM tasks";
const JOIN_CATEGORIES: &str = "JOIN categories ON tasks.category_id = categories.id";
const WHERE_CATEGORY: &str = "WHERE categories.title = ?1";
const WHERE_TITLE: &str = "WHERE tasks.title = ?1";
const ORDER_BY_ID: &str = "ORDER BY tasks.id";
const SELECT_CATEGORY_TITLE: &str = "
    SELECT categories.title
    FROM tasks
    JOIN categories ON tasks.category_id = categories.id
    WHERE tasks.title = ?1
";

pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn list(&self, filter: &TaskFilter) -> DbResult<Vec<Task>> {
        let tasks = match filter {
            TaskFilter::All => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID))?;
                let rows = stmt.query_map([], Self::map_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            TaskFilter::ByCategory(category) => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{} {} {} {}", SELECT_TASKS, JOIN_CATEGORIES, WHERE_CATEGORY, ORDER_BY_ID))?;
                let rows = stmt.query_map(params![category], Self::map_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(tasks)
    }

    pub fn get_by_title(&self, title: &str) -> DbResult<Option<Task>> {
        Ok(self
            .conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_TITLE), params![title], Self::map_row)
            .optional()?)
    }

    /// Fails when the title is taken or `category_id` does not exist.
    pub fn add(&self, title: &str, description: Option<&str>, category_id: i64) -> DbResult<i64> {
        self.conn.execute(INSERT_TASK, params![title, description, category_id])?;
        tracing::debug!(title, category_id, "task inserted");
        Ok(self.conn.last_insert_rowid())
    }

    pub fn delete(&self, title: &str) -> DbResult<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![title])?;
        tracing::debug!(title, affected, "task deleted");
        Ok(affected)
    }

    pub fn set_done(&self, title: &str, done: bool) -> DbResult<usize> {
        let affected = self.conn.execute(UPDATE_DONE, params![title, done])?;
        tracing::debug!(title, done, affected, "task done flag updated");
        Ok(affected)
    }

    pub fn find_category_title(&self, title: &str) -> DbResult<Option<String>> {
        Ok(self
            .conn
            .query_row(SELECT_CATEGORY_TITLE, params![title], |row| row.get(0))
            .optional()?)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            done: row.get(3)?,
            category_id: row.get(4)?,
        })
    }
}
