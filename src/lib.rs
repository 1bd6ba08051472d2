use crate::app_config::AppConfig;
use crate::commands::{activity, expense, task};
use crate::core::expense_tracker::ExpenseTracker;
use crate::core::models::{Expense, Task};
use crate::core::store::JsonFileStore;
use crate::core::task_tracker::TaskTracker;
use crate::services::github::GithubClient;
use chrono::Utc;
use dotenvy::dotenv;
use log::debug;

pub mod core;
pub mod services;
pub mod commands;
pub mod app_config;

pub fn initialize_environment() {
    // a missing .env is fine, everything has a default
    let _ = dotenv();
    pretty_env_logger::init();
}

pub fn open_task_tracker(config: &AppConfig) -> TaskTracker<JsonFileStore<Task>> {
    debug!("Using task store {}", config.tasks_file);
    TaskTracker::new(JsonFileStore::new(&config.tasks_file))
}

pub fn open_expense_tracker(config: &AppConfig) -> ExpenseTracker<JsonFileStore<Expense>> {
    debug!("Using expense store {}", config.expenses_file);
    ExpenseTracker::new(JsonFileStore::new(&config.expenses_file))
}

pub fn run_task_command(command: task::TaskCommand) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::new()?;
    let mut tracker = open_task_tracker(&config);
    let mut stdout = std::io::stdout();
    task::execute_command(&mut tracker, command, Utc::now(), &mut stdout)
}

pub fn run_expense_command(command: expense::ExpenseCommand) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::new()?;
    let mut tracker = open_expense_tracker(&config);
    let mut stdout = std::io::stdout();
    expense::execute_command(&mut tracker, command, Utc::now(), &mut stdout)
}

pub async fn run_activity_command(username: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::new()?;
    let client = GithubClient::new(&config)?;
    let mut stdout = std::io::stdout();
    activity::execute_command(&client, username, &mut stdout).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::RecordStore;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> AppConfig {
        AppConfig {
            tasks_file: temp_dir.path().join("tasks.json").to_str().unwrap().to_string(),
            expenses_file: temp_dir.path().join("expenses.json").to_str().unwrap().to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_trackers_use_configured_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let mut tasks = open_task_tracker(&config);
        tasks.add_task("write tests".to_string(), Utc::now()).unwrap();
        assert!(temp_dir.path().join("tasks.json").exists());
        assert!(!temp_dir.path().join("expenses.json").exists());

        let mut expenses = open_expense_tracker(&config);
        expenses.add_expense("Coffee".to_string(), 3.5, Utc::now()).unwrap();
        assert!(temp_dir.path().join("expenses.json").exists());
        assert_eq!(expenses.store().records().unwrap().len(), 1);
    }
}
