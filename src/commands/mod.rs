pub mod activity;
pub mod common;
pub mod expense;
pub mod task;
