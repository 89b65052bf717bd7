//! Persisted key layout. Each widget owns exactly one key.

pub const NOTES: &str = "notes";
pub const TODOS: &str = "todos";
pub const BOOKMARKS: &str = "bookmarks";
pub const CONTACTS: &str = "contacts";
pub const SHOPPING_LIST: &str = "shoppingList";
pub const DAILY_PLANNER: &str = "dailyPlanner";
pub const POMODORO_SETTINGS: &str = "pomodoroSettings";
pub const POMODORO_STATE: &str = "pomodoroState";
pub const STOPWATCH_LAST_TIME: &str = "stopwatch_lastTime";
pub const TEXT_EDITOR_CONTENT: &str = "textEditor_content";
pub const TEXT_EDITOR_TITLE: &str = "textEditor_title";
pub const TEXT_EDITOR_DOCUMENTS: &str = "textEditor_documents";
pub const SHORTENED_URLS: &str = "shortenedUrls";

/// Every key in the layout, in display order.
pub const ALL: [&str; 13] = [
    NOTES,
    TODOS,
    BOOKMARKS,
    CONTACTS,
    SHOPPING_LIST,
    DAILY_PLANNER,
    POMODORO_SETTINGS,
    POMODORO_STATE,
    STOPWATCH_LAST_TIME,
    TEXT_EDITOR_CONTENT,
    TEXT_EDITOR_TITLE,
    TEXT_EDITOR_DOCUMENTS,
    SHORTENED_URLS,
];
