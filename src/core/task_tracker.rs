// src/core/task_tracker.rs

use crate::core::error::TrackerError;
use crate::core::models::{Task, TaskStatus};
use crate::core::store::{next_id, Record, RecordStore, StoreError};

use chrono::{DateTime, Utc};
use log::{debug, info};

pub struct TaskTracker<S> {
    store: S,
}

impl<S: RecordStore<Task>> TaskTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tasks(&self) -> Result<Vec<Task>, StoreError> {
        self.store.records()
    }

    pub fn get_task(&self, id: u32) -> Result<Option<Task>, StoreError> {
        Ok(self.tasks()?.into_iter().find(|task| task.id() == id))
    }

    pub fn add_task(&mut self, description: String, now: DateTime<Utc>) -> Result<Task, TrackerError> {
        if description.trim().is_empty() {
            return Err(TrackerError::Invalid("Task description cannot be empty"));
        }

        let mut tasks = self.tasks()?;
        let task = Task::new(next_id(&tasks)?, description, now)?;
        tasks.push(task.clone());
        self.store.save(&tasks)?;

        info!("Added task {}", task.id());
        Ok(task)
    }

    /// Returns `None` when no task has this ID.
    pub fn update_task(&mut self, id: u32, description: String, now: DateTime<Utc>) -> Result<Option<Task>, TrackerError> {
        if description.trim().is_empty() {
            return Err(TrackerError::Invalid("Task description cannot be empty"));
        }

        let mut tasks = self.tasks()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id() == id) else {
            debug!("Task {} not found for update", id);
            return Ok(None);
        };
        task.set_description(description, now)?;
        let updated = task.clone();
        self.store.save(&tasks)?;

        info!("Updated task {}", id);
        Ok(Some(updated))
    }

    /// Removes the first task with this ID. The store is left untouched
    /// when nothing matches.
    pub fn delete_task(&mut self, id: u32) -> Result<Option<Task>, StoreError> {
        let mut tasks = self.tasks()?;
        let Some(position) = tasks.iter().position(|task| task.id() == id) else {
            debug!("Task {} not found for delete", id);
            return Ok(None);
        };
        let removed = tasks.remove(position);
        self.store.save(&tasks)?;

        info!("Deleted task {}", id);
        Ok(Some(removed))
    }

    pub fn update_status(&mut self, id: u32, status: TaskStatus, now: DateTime<Utc>) -> Result<Option<Task>, StoreError> {
        let mut tasks = self.tasks()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id() == id) else {
            debug!("Task {} not found for status change", id);
            return Ok(None);
        };
        task.set_status(status, now);
        let updated = task.clone();
        self.store.save(&tasks)?;

        info!("Task {} is now {}", id, status);
        Ok(Some(updated))
    }

    pub fn list_tasks(&self, filter: Option<TaskStatus>) -> Result<Vec<Task>, StoreError> {
        let tasks = self.tasks()?;
        Ok(match filter {
            Some(status) => tasks.into_iter().filter(|task| task.status() == status).collect(),
            None => tasks,
        })
    }
}
