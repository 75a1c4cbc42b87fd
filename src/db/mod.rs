//! Persistence layer: one SQLite file with `categories` and `tasks`.
//!
//! ```rust
//! use taskdesk::db::db::Db;
//! use taskdesk::libs::task::TaskFilter;
//!
//! let db = Db::in_memory().unwrap();
//! let work = db.categories().add("Work").unwrap();
//! db.tasks().add("Write report", Some("Draft v1"), work).unwrap();
//! assert_eq!(db.tasks().list(&TaskFilter::All).unwrap().len(), 1);
//! ```

/// Connection setup shared by every repository.
pub mod db;

pub mod error;

/// Schema creation and version tracking.
pub mod migrations;

/// Category rows, unique by title.
pub mod categories;

/// Task rows, owned by a category.
pub mod tasks;
