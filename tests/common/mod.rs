#![allow(dead_code)]
use std::collections::VecDeque;
use taskdesk::db::db::{Db, DB_FILE_NAME};
use taskdesk::libs::messages::Message;
use taskdesk::libs::task::{TaskFilter, TaskForm, TaskItem};
use taskdesk::libs::view::{CategoriesView, CategoryEvent, Dialogs, TaskEvent, TasksView};
use tempfile::TempDir;
use test_context::TestContext;

/// A fresh database file in a temporary directory.
pub struct DbContext {
    pub temp_dir: TempDir,
    pub db: Db,
}

impl TestContext for DbContext {
    fn setup() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let db = Db::open(temp_dir.path().join(DB_FILE_NAME)).unwrap();
        DbContext { temp_dir, db }
    }
}

impl DbContext {
    pub fn seed(&self, category: &str, tasks: &[&str]) -> i64 {
        let id = self.db.categories().add(category).unwrap();
        for title in tasks {
            self.db.tasks().add(title, None, id).unwrap();
        }
        id
    }

    pub fn task_titles(&self, filter: &TaskFilter) -> Vec<String> {
        self.db.tasks().list(filter).unwrap().into_iter().map(|t| t.title).collect()
    }
}

pub fn form(title: &str, description: &str, category: &str) -> TaskForm {
    TaskForm {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
    }
}

/// Category dialog driven by queued answers.
#[derive(Default)]
pub struct ScriptedCategoryView {
    pub events: VecDeque<CategoryEvent>,
    pub confirms: VecDeque<bool>,
    pub prompts: VecDeque<Option<String>>,
    pub questions: Vec<String>,
    pub notifications: Vec<Message>,
    pub shown: Vec<String>,
}

impl Dialogs for ScriptedCategoryView {
    fn confirm(&mut self, _title: &str, question: &str) -> anyhow::Result<bool> {
        self.questions.push(question.to_string());
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn prompt_text(&mut self, _title: &str, _label: &str) -> anyhow::Result<Option<String>> {
        Ok(self.prompts.pop_front().flatten())
    }

    fn notify(&mut self, message: Message) {
        self.notifications.push(message);
    }
}

impl CategoriesView for ScriptedCategoryView {
    fn next_event(&mut self) -> anyhow::Result<CategoryEvent> {
        Ok(self.events.pop_front().unwrap_or(CategoryEvent::Close))
    }

    fn show_categories(&mut self, titles: &[String]) {
        self.shown = titles.to_vec();
    }
}

/// Main window driven by queued answers; records everything rendered.
#[derive(Default)]
pub struct ScriptedView {
    pub events: VecDeque<TaskEvent>,
    pub forms: VecDeque<TaskForm>,
    pub confirms: VecDeque<bool>,
    pub questions: Vec<String>,
    pub notifications: Vec<Message>,
    pub shown_tasks: Vec<TaskItem>,
    pub assignable: Vec<String>,
    pub filters: Vec<String>,
    pub detail: Option<(String, String)>,
    pub assigned: Option<String>,
    pub dialog: ScriptedCategoryView,
    pub dialogs_opened: usize,
}

impl Dialogs for ScriptedView {
    fn confirm(&mut self, _title: &str, question: &str) -> anyhow::Result<bool> {
        self.questions.push(question.to_string());
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn prompt_text(&mut self, _title: &str, _label: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    fn notify(&mut self, message: Message) {
        self.notifications.push(message);
    }
}

impl TasksView for ScriptedView {
    type CategoryDialog<'v> = &'v mut ScriptedCategoryView;

    fn next_event(&mut self) -> anyhow::Result<TaskEvent> {
        Ok(self.events.pop_front().unwrap_or(TaskEvent::Quit))
    }

    fn show_tasks(&mut self, items: &[TaskItem]) {
        self.shown_tasks = items.to_vec();
    }

    fn set_item_checked(&mut self, index: usize, checked: bool) {
        if let Some(item) = self.shown_tasks.get_mut(index) {
            item.checked = checked;
        }
    }

    fn show_category_choices(&mut self, assignable: &[String], filters: &[String]) {
        self.assignable = assignable.to_vec();
        self.filters = filters.to_vec();
    }

    fn show_detail(&mut self, title: &str, description: &str) {
        self.detail = Some((title.to_string(), description.to_string()));
    }

    fn set_assigned_category(&mut self, category: &str) {
        self.assigned = Some(category.to_string());
    }

    fn read_form(&mut self) -> anyhow::Result<TaskForm> {
        Ok(self.forms.pop_front().unwrap_or_default())
    }

    fn category_dialog(&mut self) -> Self::CategoryDialog<'_> {
        self.dialogs_opened += 1;
        &mut self.dialog
    }
}
