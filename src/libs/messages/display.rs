//! Human-readable text for [`Message`] variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskNotFound(title) => format!("Task '{}' not found", title),
            Message::TaskMarkedDone(title) => format!("Task '{}' marked as done", title),
            Message::TaskMarkedUndone(title) => format!("Task '{}' marked as not done", title),
            Message::TaskTitleRequired => "Task title must not be empty".to_string(),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::TasksHeaderFiltered(category) => format!("📋 Tasks in '{}'", category),
            Message::NoTaskSelected => "Select a task first".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::DialogDeleteTask => "Delete task".to_string(),

            // === CATEGORY MESSAGES ===
            Message::CategoryCreated(title) => format!("Category '{}' created", title),
            Message::CategoryDeleted(title) => format!("Category '{}' deleted", title),
            Message::CategoryDeletedWithTasks(title, count) => {
                format!("Category '{}' deleted together with {} task(s)", title, count)
            }
            Message::CategoryNotFound(title) => format!("Category '{}' not found", title),
            Message::CategoryAlreadyExists(title) => format!("Category '{}' already exists", title),
            Message::CategoryTitleRequired => "Category name must not be empty".to_string(),
            Message::NoCategoriesFound => "No categories found".to_string(),
            Message::CategoriesHeader => "🗂  Categories".to_string(),
            Message::NoCategorySelected => "Select a category first".to_string(),
            Message::ConfirmDeleteCategory(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::ConfirmDeleteCategoryWithTasks(title, count) => format!(
                "Category '{}' has {} task(s) that will be deleted too. Are you sure?",
                title, count
            ),
            Message::DialogDeleteCategory => "Delete category".to_string(),
            Message::DialogAddCategory => "Add category".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskDone(title) => format!("Is '{}' done?", title),
            Message::PromptFilterCategory => "Show tasks of category".to_string(),
            Message::PromptSelectTask => "Select task".to_string(),
            Message::PromptSelectCategory => "Select category".to_string(),
            Message::PromptCategoryName => "Name".to_string(),
            Message::SelectBoardAction => "What do you want to do?".to_string(),
            Message::SelectCategoryAction => "Manage categories".to_string(),
            Message::FilterAllLabel => "(all)".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbOpenFailed(err) => format!("Failed to open database: {}", err),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(err) => format!("Failed to parse configuration: {}", err),

            // === GENERAL MESSAGES ===
            Message::ActionFailed(err) => format!("Action failed: {}", err),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
