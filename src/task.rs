//! To-do tasks of a planner

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// How urgent a task is.
///
/// Priorities are displayed to the user, and also act as a sort key for tasks that have no due
/// date (see [`crate::views::list`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Rank used when ordering tasks: the most urgent priority ranks first (lowest value)
    pub fn sort_rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// The unique identifier of a [`Task`].
///
/// This is an opaque token: collaborators obtain ids from the current snapshot and hand them back
/// to the store, nothing more. Ids never change once a task is created.
#[derive(Clone, Debug, PartialEq, Hash)]
pub struct TaskId {
    content: String,
}
impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Eq for TaskId {}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(TaskId { content })
    }
}

/// A to-do task
///
/// Tasks serialize with camelCase field names (`dueDate`, `createdAt`), which is the layout the
/// planner keeps on disk. The two date fields serialize as ISO-8601 text; an absent due date
/// serializes as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique, never re-assigned after creation
    id: TaskId,

    /// The display name of the task. The UI layer guarantees it is never empty
    title: String,
    /// Free-form details, may be empty
    description: String,
    /// How urgent this task is
    priority: Priority,
    /// When this task is due (date and time), or None for "no due date"
    due_date: Option<DateTime<Utc>>,
    /// Whether this task has been marked as done
    completed: bool,
    /// The time this task was created. Never changes afterwards
    created_at: DateTime<Utc>,
}

impl Task {
    /// Create a brand new task.
    /// This will pick a new (random) task ID and set the creation date to "now".
    pub fn new(title: String, description: String, priority: Priority,
               due_date: Option<DateTime<Utc>>, completed: bool) -> Self {
        let new_id = TaskId::random();
        let new_created_at = Utc::now();
        Self::new_with_parameters(new_id, title, description, priority, due_date, completed, new_created_at)
    }

    /// Create a task whose every field is already known (e.g. when importing existing data)
    pub fn new_with_parameters(id: TaskId, title: String, description: String, priority: Priority,
                               due_date: Option<DateTime<Utc>>, completed: bool,
                               created_at: DateTime<Utc>) -> Self
    {
        Self {
            id,
            title,
            description,
            priority,
            due_date,
            completed,
            created_at,
        }
    }

    pub fn id(&self) -> &TaskId         { &self.id          }
    pub fn title(&self) -> &str         { &self.title       }
    pub fn description(&self) -> &str   { &self.description }
    pub fn priority(&self) -> Priority  { self.priority     }
    pub fn completed(&self) -> bool     { self.completed    }
    pub fn due_date(&self) -> Option<&DateTime<Utc>>  { self.due_date.as_ref() }
    pub fn created_at(&self) -> &DateTime<Utc>        { &self.created_at }

    /// Flip the completion state (done becomes to-do, to-do becomes done)
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Merge the fields of `patch` into this task.
    ///
    /// Fields the patch leaves out are untouched. The id and the creation date are not part of
    /// [`TaskPatch`], so they cannot change through this path.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            // Some(None) clears the due date, None leaves it as it was
            self.due_date = due_date;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// A partial update to an existing [`Task`].
///
/// Every field is optional; `None` means "leave this field as it is".
/// `due_date` is doubly optional so that a patch can tell apart "keep the current due date"
/// (`None`) from "remove the due date" (`Some(None)`).
///
/// Completion can be set here as well as through
/// [`TaskStore::complete_task`](crate::store::TaskStore::complete_task): edit forms overwrite the
/// whole record and go through a patch, while the checkbox of a task card toggles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub completed: Option<bool>,
}
