use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_id, required, Collection, Priority, Record};
use crate::error::ValidationError;
use crate::storage::keys;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
}

impl Record for Todo {
    const KEY: &'static str = keys::TODOS;
    const NAME: &'static str = "todo";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    fn matches(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }
}

impl Collection<'_, Todo> {
    /// New todos go to the top of the list.
    pub fn add(&mut self, text: &str, priority: Priority) -> Result<&Todo, ValidationError> {
        let text = required("text", text)?;
        Ok(self.push_front(Todo {
            id: new_id(),
            text,
            completed: false,
            created_at: Utc::now(),
            priority,
        }))
    }

    pub fn toggle(&mut self, id: &str) -> Result<&Todo, ValidationError> {
        self.modify(id, |todo| todo.completed = !todo.completed)
    }

    pub fn filtered(&self, filter: TodoFilter) -> impl Iterator<Item = &Todo> {
        self.items().iter().filter(move |todo| filter.matches(todo))
    }

    pub fn completed_count(&self) -> usize {
        self.filtered(TodoFilter::Completed).count()
    }
}
