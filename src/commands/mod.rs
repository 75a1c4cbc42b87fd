//! Command-line surface.
//!
//! Without a subcommand the interactive board starts; the other subcommands
//! run a single persistence operation and exit.

pub mod category;
pub mod config;
pub mod task;
pub mod ui;

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Open the interactive task board (default)")]
    Ui,
    #[command(about = "List tasks, optionally of one category")]
    List(task::ListArgs),
    #[command(about = "Add a task to a category")]
    Add(task::AddArgs),
    #[command(about = "Mark a task as done or not done")]
    Done(task::DoneArgs),
    #[command(about = "Delete a task")]
    Delete(task::DeleteArgs),
    #[command(about = "Manage categories")]
    Category(category::CategoryArgs),
    #[command(about = "Show or change the configuration")]
    Config(config::ConfigArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let config = Config::read()?;

        if let Some(Commands::Config(args)) = self.command {
            return config::cmd(args, config);
        }

        let db = open_db(&config, self.db)?;
        match self.command {
            None | Some(Commands::Ui) => ui::cmd(&db),
            Some(Commands::List(args)) => task::list(&db, args),
            Some(Commands::Add(args)) => task::add(&db, args),
            Some(Commands::Done(args)) => task::done(&db, args),
            Some(Commands::Delete(args)) => task::delete(&db, &config, args),
            Some(Commands::Category(args)) => category::cmd(&db, &config, args),
            Some(Commands::Config(_)) => Ok(()),
        }
    }
}

/// An unusable database file is fatal; the caller exits non-zero.
pub fn open_db(config: &Config, override_path: Option<PathBuf>) -> Result<Db> {
    let path = config.db_path(override_path);
    Db::open(&path).map_err(|e| msg_error_anyhow!(Message::DbOpenFailed(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_db_flag_is_global() {
        let cli = Cli::try_parse_from(["taskdesk", "list", "--db", "other.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("other.db")));
        assert!(matches!(cli.command, Some(Commands::List(_))));

        let cli = Cli::try_parse_from(["taskdesk"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_category_defaults_to_manage() {
        let cli = Cli::try_parse_from(["taskdesk", "category"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Category(category::CategoryArgs { command: None }))));
    }
}
