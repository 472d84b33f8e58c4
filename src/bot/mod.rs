//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles incoming text messages and commands
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates keyboards and formats notices

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use message_handler::message_handler;
pub use callback_handler::callback_handler;

// Re-export utility functions that might be used elsewhere
pub use ui_builder::{create_movies_menu_keyboard, create_root_menu_keyboard};
