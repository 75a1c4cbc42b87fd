//! Interactive terminal front end for the board and the category dialog.
//!
//! Each window is a menu loop built on dialoguer; lists are printed with
//! prettytable. Gestures that need a selected row first (delete) emit the
//! selection event ahead of the action, the way clicking a row and then a
//! button would.

use super::messages::Message;
use super::task::{TaskForm, TaskItem};
use super::view::{CategoriesView, CategoryEvent, Dialogs, TaskEvent, TasksView, View};
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::collections::VecDeque;

const BOARD_ACTIONS: &[&str] = &[
    "Select task",
    "Add task",
    "Delete task",
    "Filter by category",
    "Manage categories",
    "Quit",
];
const CATEGORY_ACTIONS: &[&str] = &["Add category", "Delete category", "Close"];

fn report(message: Message) {
    match message {
        Message::ActionFailed(_) | Message::CategoryNotFound(_) | Message::TaskTitleRequired => msg_error!(message),
        Message::NoTaskSelected | Message::NoCategorySelected => msg_warning!(message),
        Message::TasksNotFound | Message::NoCategoriesFound | Message::OperationCancelled => msg_info!(message),
        _ => msg_success!(message),
    }
}

fn confirm(theme: &ColorfulTheme, title: &str, question: &str) -> Result<bool> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(format!("{}: {}", title, question))
        .default(false)
        .interact()?)
}

fn prompt_text(theme: &ColorfulTheme, title: &str, label: &str) -> Result<Option<String>> {
    msg_print!(title);
    let text: String = Input::with_theme(theme).with_prompt(label).allow_empty(true).interact_text()?;
    Ok(Some(text).filter(|t| !t.is_empty()))
}

pub struct TerminalView {
    theme: ColorfulTheme,
    items: Vec<TaskItem>,
    assignable: Vec<String>,
    filters: Vec<String>,
    assigned: Option<String>,
    detail: Option<(String, String)>,
    pending: VecDeque<TaskEvent>,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            items: Vec::new(),
            assignable: Vec::new(),
            filters: Vec::new(),
            assigned: None,
            detail: None,
            pending: VecDeque::new(),
        }
    }

    fn pick_task(&self) -> Result<Option<usize>> {
        if self.items.is_empty() {
            report(Message::TasksNotFound);
            return Ok(None);
        }
        let labels: Vec<String> = self
            .items
            .iter()
            .map(|item| format!("{} {}", View::check_mark(item.checked), item.title))
            .collect();
        Ok(Select::with_theme(&self.theme)
            .with_prompt(Message::PromptSelectTask.to_string())
            .items(&labels)
            .default(0)
            .interact_opt()?)
    }

    fn pick_filter(&self) -> Result<Option<String>> {
        let labels: Vec<String> = self
            .filters
            .iter()
            .map(|f| if f.is_empty() { Message::FilterAllLabel.to_string() } else { f.clone() })
            .collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt(Message::PromptFilterCategory.to_string())
            .items(&labels)
            .default(labels.len().saturating_sub(1))
            .interact_opt()?;
        Ok(selection.map(|i| self.filters[i].clone()))
    }

    /// Delete acts on a selected row, so the row is selected first.
    fn delete_gesture(&mut self, index: usize) -> TaskEvent {
        let checked = self.items[index].checked;
        self.pending.push_back(TaskEvent::Delete);
        TaskEvent::Select { index, checked }
    }
}

impl Dialogs for TerminalView {
    fn confirm(&mut self, title: &str, question: &str) -> Result<bool> {
        confirm(&self.theme, title, question)
    }

    fn prompt_text(&mut self, title: &str, label: &str) -> Result<Option<String>> {
        prompt_text(&self.theme, title, label)
    }

    fn notify(&mut self, message: Message) {
        report(message);
    }
}

impl TasksView for TerminalView {
    type CategoryDialog<'v> = TerminalCategoryDialog<'v>;

    fn next_event(&mut self) -> Result<TaskEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(event);
            }

            let action = Select::with_theme(&self.theme)
                .with_prompt(Message::SelectBoardAction.to_string())
                .items(BOARD_ACTIONS)
                .default(0)
                .interact_opt()?;

            match action {
                Some(0) => {
                    if let Some(index) = self.pick_task()? {
                        let item = &self.items[index];
                        let checked = Confirm::with_theme(&self.theme)
                            .with_prompt(Message::PromptTaskDone(item.title.clone()).to_string())
                            .default(item.checked)
                            .interact()?;
                        return Ok(TaskEvent::Select { index, checked });
                    }
                }
                Some(1) => return Ok(TaskEvent::Add),
                Some(2) => {
                    if let Some(index) = self.pick_task()? {
                        return Ok(self.delete_gesture(index));
                    }
                }
                Some(3) => {
                    if let Some(filter) = self.pick_filter()? {
                        return Ok(TaskEvent::FilterChanged(filter));
                    }
                }
                Some(4) => return Ok(TaskEvent::ManageCategories),
                _ => return Ok(TaskEvent::Quit),
            }
        }
    }

    fn show_tasks(&mut self, items: &[TaskItem]) {
        self.items = items.to_vec();
        self.detail = None;
        if self.items.is_empty() {
            report(Message::TasksNotFound);
        } else {
            msg_print!(Message::TasksHeader, true);
            View::tasks(&self.items);
        }
    }

    fn set_item_checked(&mut self, index: usize, checked: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.checked = checked;
        }
    }

    fn show_category_choices(&mut self, assignable: &[String], filters: &[String]) {
        self.assignable = assignable.to_vec();
        self.filters = filters.to_vec();
        if self.assigned.as_ref().is_some_and(|a| !self.assignable.contains(a)) {
            self.assigned = None;
        }
    }

    fn show_detail(&mut self, title: &str, description: &str) {
        msg_print!(format!("{}\n{}", title, description), true);
        self.detail = Some((title.to_string(), description.to_string()));
    }

    fn set_assigned_category(&mut self, category: &str) {
        self.assigned = Some(category.to_string());
    }

    fn read_form(&mut self) -> Result<TaskForm> {
        let (title, description) = self.detail.clone().unwrap_or_default();

        let mut title_input = Input::<String>::with_theme(&self.theme).with_prompt(Message::PromptTaskTitle.to_string());
        if !title.is_empty() {
            title_input = title_input.default(title);
        }
        let title = title_input.interact_text()?;

        let mut description_input = Input::<String>::with_theme(&self.theme)
            .with_prompt(Message::PromptTaskDescription.to_string())
            .allow_empty(true);
        if !description.is_empty() {
            description_input = description_input.default(description);
        }
        let description = description_input.interact_text()?;

        let category = if self.assignable.is_empty() {
            report(Message::NoCategoriesFound);
            String::new()
        } else {
            let default = self
                .assigned
                .as_ref()
                .and_then(|a| self.assignable.iter().position(|c| c == a))
                .unwrap_or(0);
            let index = Select::with_theme(&self.theme)
                .with_prompt(Message::PromptTaskCategory.to_string())
                .items(&self.assignable)
                .default(default)
                .interact()?;
            self.assigned = Some(self.assignable[index].clone());
            self.assignable[index].clone()
        };

        Ok(TaskForm {
            title,
            description,
            category,
        })
    }

    fn category_dialog(&mut self) -> Self::CategoryDialog<'_> {
        TerminalCategoryDialog::new(&self.theme)
    }
}

pub struct TerminalCategoryDialog<'v> {
    theme: &'v ColorfulTheme,
    categories: Vec<String>,
    pending: VecDeque<CategoryEvent>,
}

impl<'v> TerminalCategoryDialog<'v> {
    pub fn new(theme: &'v ColorfulTheme) -> Self {
        Self {
            theme,
            categories: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    fn delete_gesture(&mut self, index: usize) -> CategoryEvent {
        self.pending.push_back(CategoryEvent::Delete);
        CategoryEvent::Select(index)
    }
}

impl Dialogs for TerminalCategoryDialog<'_> {
    fn confirm(&mut self, title: &str, question: &str) -> Result<bool> {
        confirm(self.theme, title, question)
    }

    fn prompt_text(&mut self, title: &str, label: &str) -> Result<Option<String>> {
        prompt_text(self.theme, title, label)
    }

    fn notify(&mut self, message: Message) {
        report(message);
    }
}

impl CategoriesView for TerminalCategoryDialog<'_> {
    fn next_event(&mut self) -> Result<CategoryEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(event);
            }

            let action = Select::with_theme(self.theme)
                .with_prompt(Message::SelectCategoryAction.to_string())
                .items(CATEGORY_ACTIONS)
                .default(0)
                .interact_opt()?;

            match action {
                Some(0) => return Ok(CategoryEvent::Add),
                Some(1) => {
                    if self.categories.is_empty() {
                        report(Message::NoCategoriesFound);
                        continue;
                    }
                    let selection = Select::with_theme(self.theme)
                        .with_prompt(Message::PromptSelectCategory.to_string())
                        .items(&self.categories)
                        .default(0)
                        .interact_opt()?;
                    if let Some(index) = selection {
                        return Ok(self.delete_gesture(index));
                    }
                }
                _ => return Ok(CategoryEvent::Close),
            }
        }
    }

    fn show_categories(&mut self, titles: &[String]) {
        self.categories = titles.to_vec();
        if self.categories.is_empty() {
            report(Message::NoCategoriesFound);
        } else {
            msg_print!(Message::CategoriesHeader, true);
            View::categories(&self.categories);
        }
    }
}
