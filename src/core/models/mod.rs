// src/core/models/mod.rs

pub mod task;
pub mod expense;
pub mod event;

pub use task::*;
pub use expense::*;
pub use event::*;
