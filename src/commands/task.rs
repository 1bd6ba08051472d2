// src/commands/task.rs

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::{error::Error, io::Write};

use crate::core::models::{Task, TaskStatus};
use crate::core::store::RecordStore;
use crate::core::task_tracker::TaskTracker;
use super::common::join_words;

#[derive(Parser, Debug)]
#[command(name = "task_tracker", about = "Track tasks in a local JSON file")]
pub struct TaskCli {
    #[command(subcommand)]
    pub command: TaskCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TaskCommand {
    /// Add a new task
    Add {
        /// Task description, multiple words are joined with spaces
        #[arg(required = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// Replace a task's description
    Update {
        id: u32,
        #[arg(required = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// Delete a task
    Delete { id: u32 },
    /// Mark a task as in progress
    InProgress { id: u32 },
    /// Mark a task as done
    Done { id: u32 },
    /// Set a task's status (todo, in-progress, done)
    Mark { id: u32, status: String },
    /// List all tasks
    List,
    /// List tasks still to do
    ListTodo,
    /// List tasks in progress
    ListInProgress,
    /// List finished tasks
    ListDone,
}

pub fn execute_command<S: RecordStore<Task>, W: Write>(
    tracker: &mut TaskTracker<S>,
    command: TaskCommand,
    now: DateTime<Utc>,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    match command {
        TaskCommand::Add { description } => {
            let task = tracker.add_task(join_words(&description), now)?;
            writeln!(output, "Task added with ID: {}", task.id)?;
        }
        TaskCommand::Update { id, description } => {
            match tracker.update_task(id, join_words(&description), now)? {
                Some(_) => writeln!(output, "Task {} updated", id)?,
                None => writeln!(output, "Task {} not found", id)?,
            }
        }
        TaskCommand::Delete { id } => match tracker.delete_task(id)? {
            Some(_) => writeln!(output, "Task {} deleted", id)?,
            None => writeln!(output, "Task {} not found", id)?,
        },
        TaskCommand::InProgress { id } => change_status(tracker, id, TaskStatus::InProgress, now, output)?,
        TaskCommand::Done { id } => change_status(tracker, id, TaskStatus::Done, now, output)?,
        TaskCommand::Mark { id, status } => match status.parse::<TaskStatus>() {
            Ok(status) => change_status(tracker, id, status, now, output)?,
            Err(message) => writeln!(output, "{}", message)?,
        },
        TaskCommand::List => print_tasks(tracker, None, output)?,
        TaskCommand::ListTodo => print_tasks(tracker, Some(TaskStatus::Todo), output)?,
        TaskCommand::ListInProgress => print_tasks(tracker, Some(TaskStatus::InProgress), output)?,
        TaskCommand::ListDone => print_tasks(tracker, Some(TaskStatus::Done), output)?,
    }
    Ok(())
}

fn change_status<S: RecordStore<Task>, W: Write>(
    tracker: &mut TaskTracker<S>,
    id: u32,
    status: TaskStatus,
    now: DateTime<Utc>,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    match tracker.update_status(id, status, now)? {
        Some(_) => writeln!(output, "Task {} status updated to {}", id, status)?,
        None => writeln!(output, "Task {} not found", id)?,
    }
    Ok(())
}

fn print_tasks<S: RecordStore<Task>, W: Write>(
    tracker: &TaskTracker<S>,
    filter: Option<TaskStatus>,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    let tasks = tracker.list_tasks(filter)?;
    if tasks.is_empty() {
        writeln!(output, "No tasks found")?;
        return Ok(());
    }
    for task in tasks {
        writeln!(output, "{}", task)?;
    }
    Ok(())
}
