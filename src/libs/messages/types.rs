#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskDeleted(String),
    TaskNotFound(String),
    TaskMarkedDone(String),
    TaskMarkedUndone(String),
    TaskTitleRequired,
    TasksNotFound,
    TasksHeader,
    TasksHeaderFiltered(String), // category title
    NoTaskSelected,
    ConfirmDeleteTask(String),
    DialogDeleteTask,

    // === CATEGORY MESSAGES ===
    CategoryCreated(String),
    CategoryDeleted(String),
    CategoryDeletedWithTasks(String, usize),
    CategoryNotFound(String),
    CategoryAlreadyExists(String),
    CategoryTitleRequired,
    NoCategoriesFound,
    CategoriesHeader,
    NoCategorySelected,
    ConfirmDeleteCategory(String),
    ConfirmDeleteCategoryWithTasks(String, usize),
    DialogDeleteCategory,
    DialogAddCategory,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskCategory,
    PromptTaskDone(String),
    PromptFilterCategory,
    PromptSelectTask,
    PromptSelectCategory,
    PromptCategoryName,
    SelectBoardAction,
    SelectCategoryAction,
    FilterAllLabel,

    // === DATABASE MESSAGES ===
    DbOpenFailed(String),
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),
    MigrationFailed(u32, String), // version, error
    AllMigrationsCompleted,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String),

    // === GENERAL MESSAGES ===
    ActionFailed(String),
    OperationCancelled,
}
