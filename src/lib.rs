//! # Taskdesk - a local task tracker
//!
//! Tasks are grouped into categories and stored in a single SQLite file.
//! Deleting a category deletes its tasks through a foreign-key cascade.
//!
//! ## Features
//!
//! - **Task Board**: list, add, delete and check off tasks, filter by category
//! - **Category Dialog**: add and delete categories
//! - **Command Line**: one-shot `list`, `add`, `done`, `delete` and `category` commands
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
