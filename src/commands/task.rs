use crate::{
    db::db::Db,
    libs::{
        config::Config,
        messages::Message,
        task::{TaskFilter, TaskItem},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only tasks of this category
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title, unique across all tasks
    pub title: String,
    /// Category the task belongs to
    #[arg(short, long)]
    pub category: String,
    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct DoneArgs {
    pub title: String,
    /// Mark as not done instead
    #[arg(long)]
    pub undo: bool,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub title: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub fn list(db: &Db, args: ListArgs) -> Result<()> {
    let filter = TaskFilter::from_title(args.category.as_deref());
    let items: Vec<TaskItem> = db.tasks().list(&filter)?.into_iter().map(TaskItem::from).collect();

    if items.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    match filter.category() {
        Some(category) => msg_print!(Message::TasksHeaderFiltered(category.to_string()), true),
        None => msg_print!(Message::TasksHeader, true),
    }
    View::tasks(&items);
    Ok(())
}

pub fn add(db: &Db, args: AddArgs) -> Result<()> {
    let title = args.title.as_str();
    if title.trim().is_empty() {
        msg_bail_anyhow!(Message::TaskTitleRequired);
    }
    let Some(category_id) = db.categories().find_id_by_title(&args.category)? else {
        msg_bail_anyhow!(Message::CategoryNotFound(args.category));
    };

    db.tasks().add(title, args.description.as_deref(), category_id)?;
    msg_success!(Message::TaskCreated(title.to_string()));
    Ok(())
}

pub fn done(db: &Db, args: DoneArgs) -> Result<()> {
    let done = !args.undo;
    if db.tasks().set_done(&args.title, done)? == 0 {
        msg_bail_anyhow!(Message::TaskNotFound(args.title));
    }

    if done {
        msg_success!(Message::TaskMarkedDone(args.title));
    } else {
        msg_success!(Message::TaskMarkedUndone(args.title));
    }
    Ok(())
}

pub fn delete(db: &Db, config: &Config, args: DeleteArgs) -> Result<()> {
    if db.tasks().get_by_title(&args.title)?.is_none() {
        msg_bail_anyhow!(Message::TaskNotFound(args.title));
    }

    if !args.yes && config.confirm_deletes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(args.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    db.tasks().delete(&args.title)?;
    msg_success!(Message::TaskDeleted(args.title));
    Ok(())
}
