// SQLite slot store
// Holds the user's planner state (shortlist, selections) as JSON payloads

mod db;
mod error;

// Public API
pub use db::Database;
pub use error::{Error, Result};
