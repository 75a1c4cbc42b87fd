//! Controller of the modal category dialog.

use super::messages::Message;
use super::view::{CategoriesView, CategoryEvent};
use crate::db::db::Db;
use anyhow::Result;

pub struct CategoryManager<'db, V: CategoriesView> {
    db: &'db Db,
    view: V,
    categories: Vec<String>,
    current: Option<usize>,
}

impl<'db, V: CategoriesView> CategoryManager<'db, V> {
    /// Opens the dialog with every category listed.
    pub fn new(db: &'db Db, view: V) -> Result<Self> {
        let mut manager = Self {
            db,
            view,
            categories: Vec::new(),
            current: None,
        };
        manager.reload()?;
        Ok(manager)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn current(&self) -> Option<&str> {
        self.current.and_then(|i| self.categories.get(i)).map(String::as_str)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn reload(&mut self) -> Result<()> {
        self.categories = self.db.categories().titles()?;
        self.current = None;
        self.view.show_categories(&self.categories);
        Ok(())
    }

    /// Out-of-range indexes clear the selection.
    pub fn select(&mut self, index: usize) {
        self.current = (index < self.categories.len()).then_some(index);
    }

    /// Prompts for a name and inserts it as typed. A cancelled or blank prompt
    /// does nothing; a duplicate name surfaces as a constraint error.
    pub fn add_category(&mut self) -> Result<bool> {
        let title = Message::DialogAddCategory.to_string();
        let label = Message::PromptCategoryName.to_string();
        let name = match self.view.prompt_text(&title, &label)? {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Ok(false),
        };

        self.db.categories().add(&name)?;
        tracing::info!(category = %name, "category added");
        self.reload()?;
        self.view.notify(Message::CategoryCreated(name));
        Ok(true)
    }

    /// Deletes the selected category and, through the cascade, its tasks.
    pub fn delete_category(&mut self) -> Result<bool> {
        let Some(name) = self.current().map(str::to_string) else {
            self.view.notify(Message::NoCategorySelected);
            return Ok(false);
        };

        let task_count = self.db.categories().count_tasks(&name)?;
        let question = if task_count > 0 {
            Message::ConfirmDeleteCategoryWithTasks(name.clone(), task_count)
        } else {
            Message::ConfirmDeleteCategory(name.clone())
        };
        if !self.view.confirm(&Message::DialogDeleteCategory.to_string(), &question.to_string())? {
            return Ok(false);
        }

        self.db.categories().delete(&name)?;
        tracing::info!(category = %name, task_count, "category deleted");
        self.reload()?;
        self.view.notify(if task_count > 0 {
            Message::CategoryDeletedWithTasks(name, task_count)
        } else {
            Message::CategoryDeleted(name)
        });
        Ok(true)
    }

    /// Dispatches dialog events until the user closes it.
    pub fn exec(&mut self) -> Result<()> {
        loop {
            let outcome = match self.view.next_event()? {
                CategoryEvent::Select(index) => {
                    self.select(index);
                    Ok(())
                }
                CategoryEvent::Add => self.add_category().map(|_| ()),
                CategoryEvent::Delete => self.delete_category().map(|_| ()),
                CategoryEvent::Close => return Ok(()),
            };
            if let Err(e) = outcome {
                tracing::error!(error = %e, "category action failed");
                self.view.notify(Message::ActionFailed(e.to_string()));
            }
        }
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
