//! Application logic between the database and the terminal.
//!
//! The two controllers ([`task_board`] and [`category_manager`]) only talk to
//! the presentation layer through the traits in [`view`]; [`terminal`] is the
//! interactive implementation of those traits.
//!
//! ```rust
//! use taskdesk::db::db::Db;
//! use taskdesk::libs::task::TaskFilter;
//!
//! let db = Db::in_memory().unwrap();
//! db.categories().add("Home").unwrap();
//! assert!(db.tasks().list(&TaskFilter::ByCategory("Home".into())).unwrap().is_empty());
//! ```

pub mod category;
pub mod category_manager;
pub mod config;
pub mod data_storage;
pub mod messages;
pub mod task;
pub mod task_board;
pub mod terminal;
pub mod view;
