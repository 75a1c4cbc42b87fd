//! Capabilities the controllers need from the presentation layer.
//!
//! [`TaskBoard`](super::task_board::TaskBoard) drives a [`TasksView`],
//! [`CategoryManager`](super::category_manager::CategoryManager) drives a
//! [`CategoriesView`]. Both pull user gestures with `next_event` and push
//! state back through the `show_*` methods, so the controllers never touch a
//! terminal directly.

use super::messages::Message;
use super::task::{TaskForm, TaskItem};
use anyhow::Result;
use prettytable::{row, Table};

/// A gesture on the main window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    /// An item was clicked while its checkbox showed `checked`.
    Select { index: usize, checked: bool },
    Add,
    Delete,
    /// New value of the filter selector; empty means all categories.
    FilterChanged(String),
    ManageCategories,
    Quit,
}

/// A gesture in the category dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryEvent {
    Select(usize),
    Add,
    Delete,
    Close,
}

/// Modal dialogs shared by both windows.
pub trait Dialogs {
    /// Yes/no question.
    fn confirm(&mut self, title: &str, question: &str) -> Result<bool>;

    /// Single-line text input. `None` when the user cancels.
    fn prompt_text(&mut self, title: &str, label: &str) -> Result<Option<String>>;

    /// Non-blocking feedback.
    fn notify(&mut self, message: Message);
}

pub trait TasksView: Dialogs {
    type CategoryDialog<'v>: CategoriesView
    where
        Self: 'v;

    fn next_event(&mut self) -> Result<TaskEvent>;

    fn show_tasks(&mut self, items: &[TaskItem]);

    /// Mirrors a checkbox change the board has just persisted.
    fn set_item_checked(&mut self, index: usize, checked: bool);

    /// `filters` ends with the empty "no filter" entry.
    fn show_category_choices(&mut self, assignable: &[String], filters: &[String]);

    fn show_detail(&mut self, title: &str, description: &str);

    /// Moves the assignment selector to `category`.
    fn set_assigned_category(&mut self, category: &str);

    fn read_form(&mut self) -> Result<TaskForm>;

    /// Modal category dialog; the board resumes when it is dropped.
    fn category_dialog(&mut self) -> Self::CategoryDialog<'_>;
}

pub trait CategoriesView: Dialogs {
    fn next_event(&mut self) -> Result<CategoryEvent>;

    fn show_categories(&mut self, titles: &[String]);
}

impl<T: Dialogs + ?Sized> Dialogs for &mut T {
    fn confirm(&mut self, title: &str, question: &str) -> Result<bool> {
        (**self).confirm(title, question)
    }

    fn prompt_text(&mut self, title: &str, label: &str) -> Result<Option<String>> {
        (**self).prompt_text(title, label)
    }

    fn notify(&mut self, message: Message) {
        (**self).notify(message)
    }
}

impl<T: CategoriesView + ?Sized> CategoriesView for &mut T {
    fn next_event(&mut self) -> Result<CategoryEvent> {
        (**self).next_event()
    }

    fn show_categories(&mut self, titles: &[String]) {
        (**self).show_categories(titles)
    }
}

/// Table rendering shared by the terminal front end and the `list` command.
pub struct View {}

impl View {
    pub fn tasks_table(items: &[TaskItem]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["#", "DONE", "TITLE", "DESCRIPTION"]);
        for (index, item) in items.iter().enumerate() {
            table.add_row(row![index + 1, Self::check_mark(item.checked), item.title, item.description]);
        }
        table
    }

    pub fn categories_table(titles: &[String]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["#", "CATEGORY"]);
        for (index, title) in titles.iter().enumerate() {
            table.add_row(row![index + 1, title]);
        }
        table
    }

    pub fn tasks(items: &[TaskItem]) {
        Self::tasks_table(items).printstd();
    }

    pub fn categories(titles: &[String]) {
        Self::categories_table(titles).printstd();
    }

    pub fn check_mark(checked: bool) -> &'static str {
        if checked {
            "[x]"
        } else {
            "[ ]"
        }
    }
}
