//! Session persistence
//!
//! Remembers the last submitted query across runs: publishing overwrites the
//! stored query in place, and the next launch restores it and re-runs the
//! search. Publishing happens on submit, before the response arrives, so a
//! crash mid-request still leaves the query on disk.

use std::fs;
use std::io;
use std::path::PathBuf;

const SESSION_DIR: &str = "hubseek";
const SESSION_FILE: &str = "last_query";

/// Stores the last submitted query across runs.
///
/// Injected into the app rather than read ambiently so tests can use a
/// variant that never touches the disk.
#[derive(Debug, Clone)]
pub struct Session {
    path: Option<PathBuf>,
}

impl Session {
    /// Session backed by the user data directory
    pub fn new() -> Self {
        Self {
            path: dirs::data_dir().map(|p| p.join(SESSION_DIR).join(SESSION_FILE)),
        }
    }

    /// Session backed by an explicit file
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Session that never touches the disk
    pub fn empty() -> Self {
        Self { path: None }
    }

    /// The query stored by the previous run, if any
    pub fn read_initial_query(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let contents = fs::read_to_string(path).ok()?;
        let query = contents.trim_end_matches('\n');
        if query.is_empty() {
            None
        } else {
            Some(query.to_string())
        }
    }

    /// Record `query` as the session query, replacing the previous one.
    ///
    /// No file locking - last writer wins if multiple instances run
    /// simultaneously.
    pub fn publish(&self, query: &str) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, format!("{query}\n"))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
