#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
    pub category_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    ByCategory(String),
}

impl TaskFilter {
    /// An empty title means "no filter", matching the blank entry of the
    /// filter selector.
    pub fn from_title(title: Option<&str>) -> Self {
        match title.map(str::trim) {
            Some(t) if !t.is_empty() => TaskFilter::ByCategory(t.to_string()),
            _ => TaskFilter::All,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            TaskFilter::All => None,
            TaskFilter::ByCategory(title) => Some(title),
        }
    }
}

/// A task as rendered in the list: title, checkbox and the description
/// carried along as hidden payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub title: String,
    pub checked: bool,
    pub description: String,
}

impl From<Task> for TaskItem {
    fn from(task: Task) -> Self {
        TaskItem {
            title: task.title,
            checked: task.done,
            description: task.description.unwrap_or_default(),
        }
    }
}

/// Contents of the detail form when the user asks to add a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub category: String,
}
