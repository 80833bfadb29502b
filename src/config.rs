//! App Configuration
//!
//! Compile-time settings. There is no runtime config source.

use log::LevelFilter;

/// `localStorage` key holding the serialized task list
pub const STORAGE_KEY: &str = "todoApp.todos";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const TITLE: &str = "Todo List";
pub const INPUT_PLACEHOLDER: &str = "Add New Todo...";
pub const ADD_LABEL: &str = "Add Todo";
pub const CLEAR_LABEL: &str = "Clear Todo(s)";
