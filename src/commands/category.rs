use crate::{
    db::db::Db,
    libs::{category_manager::CategoryManager, config::Config, messages::Message, terminal::TerminalCategoryDialog, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: Option<CategoryCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// List all categories
    List,
    /// Create a new category
    Add {
        /// Category title, unique across all categories
        title: String,
    },
    /// Delete a category together with its tasks
    Delete {
        title: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Open the interactive category dialog (default)
    Manage,
}

pub fn cmd(db: &Db, config: &Config, args: CategoryArgs) -> Result<()> {
    match args.command {
        Some(CategoryCommand::List) => handle_list(db),
        Some(CategoryCommand::Add { title }) => handle_add(db, title),
        Some(CategoryCommand::Delete { title, yes }) => handle_delete(db, config, title, yes),
        Some(CategoryCommand::Manage) | None => handle_manage(db),
    }
}

fn handle_list(db: &Db) -> Result<()> {
    let titles = db.categories().titles()?;
    if titles.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    msg_print!(Message::CategoriesHeader, true);
    View::categories(&titles);
    Ok(())
}

fn handle_add(db: &Db, title: String) -> Result<()> {
    if title.trim().is_empty() {
        msg_bail_anyhow!(Message::CategoryTitleRequired);
    }
    if db.categories().find_id_by_title(&title)?.is_some() {
        msg_bail_anyhow!(Message::CategoryAlreadyExists(title));
    }

    db.categories().add(&title)?;
    msg_success!(Message::CategoryCreated(title));
    Ok(())
}

fn handle_delete(db: &Db, config: &Config, title: String, yes: bool) -> Result<()> {
    if db.categories().find_id_by_title(&title)?.is_none() {
        msg_bail_anyhow!(Message::CategoryNotFound(title));
    }

    let task_count = db.categories().count_tasks(&title)?;
    if !yes && config.confirm_deletes {
        let prompt = if task_count > 0 {
            Message::ConfirmDeleteCategoryWithTasks(title.clone(), task_count)
        } else {
            Message::ConfirmDeleteCategory(title.clone())
        };
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    db.categories().delete(&title)?;
    if task_count > 0 {
        msg_success!(Message::CategoryDeletedWithTasks(title, task_count));
    } else {
        msg_success!(Message::CategoryDeleted(title));
    }
    Ok(())
}

fn handle_manage(db: &Db) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut manager = CategoryManager::new(db, TerminalCategoryDialog::new(&theme))?;
    manager.exec()
}
