pub mod error;
pub mod expense_tracker;
pub mod models;
pub mod store;
pub mod task_tracker;
