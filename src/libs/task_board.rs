//! Controller of the main window: task list, detail form and category filter.
//!
//! Every gesture runs to completion on the calling thread: query, commit,
//! then re-render through the [`TasksView`].

use super::category_manager::CategoryManager;
use super::messages::Message;
use super::task::{TaskFilter, TaskItem};
use super::view::{TaskEvent, TasksView};
use crate::db::db::Db;
use anyhow::Result;

pub struct TaskBoard<'db, V: TasksView> {
    db: &'db Db,
    view: V,
    items: Vec<TaskItem>,
    filter: TaskFilter,
    categories: Vec<String>,
    current: Option<usize>,
}

impl<'db, V: TasksView> TaskBoard<'db, V> {
    /// Loads the unfiltered task list and both category selectors.
    ///
    /// Schema creation and foreign-key enforcement already happened in
    /// [`Db::open`].
    pub fn new(db: &'db Db, view: V) -> Result<Self> {
        let mut board = Self {
            db,
            view,
            items: Vec::new(),
            filter: TaskFilter::All,
            categories: Vec::new(),
            current: None,
        };
        board.reload_tasks()?;
        board.reload_categories()?;
        Ok(board)
    }

    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn current(&self) -> Option<&TaskItem> {
        self.current.and_then(|i| self.items.get(i))
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn reload_tasks(&mut self) -> Result<()> {
        self.items = self.db.tasks().list(&self.filter)?.into_iter().map(TaskItem::from).collect();
        self.current = None;
        self.view.show_tasks(&self.items);
        Ok(())
    }

    /// Repopulates both selectors. The filter selector gets a trailing empty
    /// entry; a filter naming a category that no longer exists falls back to
    /// all tasks.
    pub fn reload_categories(&mut self) -> Result<()> {
        self.categories = self.db.categories().titles()?;

        let mut filters = self.categories.clone();
        filters.push(String::new());
        self.view.show_category_choices(&self.categories, &filters);

        let stale = matches!(self.filter.category(), Some(title) if !self.categories.iter().any(|c| c == title));
        if stale {
            self.filter = TaskFilter::All;
            self.reload_tasks()?;
        }
        Ok(())
    }

    pub fn set_filter(&mut self, category: &str) -> Result<()> {
        self.filter = TaskFilter::from_title(Some(category));
        tracing::debug!(filter = ?self.filter, "task filter changed");
        self.reload_tasks()
    }

    /// Shows the item in the detail form and, in the same gesture, stores its
    /// checkbox state as the task's `done` flag.
    pub fn select_task(&mut self, index: usize, checked: bool) -> Result<()> {
        let Some(item) = self.items.get_mut(index) else {
            self.current = None;
            return Ok(());
        };
        item.checked = checked;
        self.current = Some(index);
        let item = item.clone();

        self.view.show_detail(&item.title, &item.description);
        if let Some(category) = self.db.tasks().find_category_title(&item.title)? {
            self.view.set_assigned_category(&category);
        }
        self.db.tasks().set_done(&item.title, checked)?;
        self.view.set_item_checked(index, checked);
        Ok(())
    }

    /// Inserts the task described by the form, title and description stored
    /// as typed. Returns `false` without touching the database when the title
    /// is blank or the category cannot be resolved.
    pub fn add_task(&mut self) -> Result<bool> {
        let form = self.view.read_form()?;
        let title = form.title.as_str();
        if title.trim().is_empty() {
            self.view.notify(Message::TaskTitleRequired);
            return Ok(false);
        }

        let Some(category_id) = self.db.categories().find_id_by_title(&form.category)? else {
            tracing::warn!(category = %form.category, "task not added, unknown category");
            self.view.notify(Message::CategoryNotFound(form.category));
            return Ok(false);
        };

        self.db.tasks().add(title, Some(form.description.as_str()), category_id)?;
        tracing::info!(task = title, category = %form.category, "task added");
        self.reload_tasks()?;
        self.view.notify(Message::TaskCreated(title.to_string()));
        Ok(true)
    }

    pub fn delete_task(&mut self) -> Result<bool> {
        let Some(title) = self.current().map(|item| item.title.clone()) else {
            self.view.notify(Message::NoTaskSelected);
            return Ok(false);
        };

        let question = Message::ConfirmDeleteTask(title.clone()).to_string();
        if !self.view.confirm(&Message::DialogDeleteTask.to_string(), &question)? {
            return Ok(false);
        }

        self.db.tasks().delete(&title)?;
        tracing::info!(task = %title, "task deleted");
        self.reload_tasks()?;
        self.view.notify(Message::TaskDeleted(title));
        Ok(true)
    }

    /// Runs the category dialog modally, then reloads tasks and categories
    /// since either may have changed.
    pub fn open_category_manager(&mut self) -> Result<()> {
        let db = self.db;
        let outcome = CategoryManager::new(db, self.view.category_dialog()).and_then(|mut manager| manager.exec());
        self.reload_tasks()?;
        self.reload_categories()?;
        outcome
    }

    fn dispatch(&mut self, event: TaskEvent) -> Result<()> {
        match event {
            TaskEvent::Select { index, checked } => self.select_task(index, checked),
            TaskEvent::Add => self.add_task().map(|_| ()),
            TaskEvent::Delete => self.delete_task().map(|_| ()),
            TaskEvent::FilterChanged(category) => self.set_filter(&category),
            TaskEvent::ManageCategories => self.open_category_manager(),
            TaskEvent::Quit => Ok(()),
        }
    }

    /// Event loop of the main window. A failing action is reported and the
    /// loop keeps going; only a failing view ends it.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let event = self.view.next_event()?;
            if event == TaskEvent::Quit {
                return Ok(());
            }
            if let Err(e) = self.dispatch(event) {
                tracing::error!(error = %e, "task action failed");
                self.view.notify(Message::ActionFailed(e.to_string()));
            }
        }
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
