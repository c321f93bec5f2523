//! This module provides the persistent task store of a planner
//!
//! The store is the single writer of the task list: UI collaborators (dialogs, the list page, the
//! calendar page...) read the current snapshot with [`TaskStore::tasks`] and request changes
//! through the mutation functions. Every mutation takes effect in memory right away and is then
//! written out to the backing file as a whole (there is no incremental diffing).
//!
//! Failing to write the backing file is logged but never reported to the caller: the in-memory
//! list stays authoritative for the rest of the session, and the next successful write will catch
//! up. See [`TaskStore::load_or_create`] for the matching policy on the read side.

use std::path::Path;
use std::path::PathBuf;
use std::error::Error;

use chrono::{DateTime, Utc};

use crate::task::{Priority, Task, TaskId, TaskPatch};

/// A task list that stores itself in a local file
#[derive(Debug, PartialEq)]
pub struct TaskStore {
    backing_file: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Initialize a store from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let tasks = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(file)?,
        };

        Ok(Self {
            backing_file: PathBuf::from(path),
            tasks,
        })
    }

    /// Initialize an empty store
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            tasks: Vec::new(),
        }
    }

    /// Initialize a store from the backing file, falling back to an empty store when there is no
    /// saved data or it cannot be parsed.
    ///
    /// This is the regular way to open a store on startup: a corrupt or unreadable file is logged
    /// and then ignored, it never prevents the app from starting.
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() == false {
            return Self::new(path);
        }

        match Self::from_file(path) {
            Ok(store) => store,
            Err(err) => {
                log::warn!("Failed to parse saved tasks: {}. Starting with an empty task list", err);
                Self::new(path)
            },
        }
    }

    /// The current task list, in insertion order.
    ///
    /// This is a read-only snapshot: to change a task, go through the mutation functions with the
    /// task's id.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given id, if any
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Create a new task and append it to the list.
    ///
    /// The store picks the id and the creation date; the returned id can be used for later
    /// updates.
    pub fn add_task(&mut self, title: String, description: String, priority: Priority,
                    due_date: Option<DateTime<Utc>>, completed: bool) -> TaskId {
        let task = Task::new(title, description, priority, due_date, completed);
        let id = task.id().clone();
        self.tasks.push(task);
        self.save_to_file();
        id
    }

    /// Merge `patch` into the task with the given id.
    ///
    /// Ids and creation dates cannot be patched. An unknown id is not an error: the UI only hands
    /// back ids it obtained from the current snapshot, so this simply does nothing.
    pub fn update_task(&mut self, id: &TaskId, patch: TaskPatch) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) {
            task.apply_patch(patch);
        }
        self.save_to_file();
    }

    /// Remove the task with the given id. An unknown id is a no-op
    pub fn delete_task(&mut self, id: &TaskId) {
        self.tasks.retain(|task| task.id() != id);
        self.save_to_file();
    }

    /// Toggle the completion state of the task with the given id (it is a flip, not a
    /// "mark as done"). An unknown id is a no-op
    pub fn complete_task(&mut self, id: &TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) {
            task.toggle_completed();
        }
        self.save_to_file();
    }

    /// Store the current task list to the backing file
    fn save_to_file(&mut self) {
        // Save the contents to the file
        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                log::warn!("Unable to save file {:?}: {}", path, err);
                return;
            },
            Ok(f) => f,
        };

        if let Err(err) = serde_json::to_writer(file, &self.tasks) {
            log::warn!("Unable to serialize: {}", err);
            return;
        };
    }
}
