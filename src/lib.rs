//! hubseek library - Interactive GitHub repository search
//!
//! This library exposes the core functionality of hubseek for testing purposes.

pub mod app;
pub mod config;
pub mod github;
pub mod humanize;
pub mod notification;
pub mod scroll;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
