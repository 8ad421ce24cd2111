use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    /// Directory holding all note files. Relative values resolve against
    /// the working directory.
    pub const NOTES_DIR: &str = "JOTBOT_NOTES_DIR";
    /// Number of concurrent file operation workers.
    pub const FILE_WORKERS: &str = "JOTBOT_FILE_WORKERS";
    /// How many submissions may wait for a worker before new ones are rejected.
    pub const MAX_PENDING: &str = "JOTBOT_MAX_PENDING";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const NOTES_DIR: &str = "notes";
    pub const FILE_WORKERS: usize = 4;
    pub const MAX_PENDING: usize = 32;
}

/// Maximum accepted prompt length for the agent endpoint, in characters.
pub const MAX_PROMPT_CHARS: usize = 10_000;

/// Agent responses longer than this are cut off with a truncation notice.
pub const MAX_RESPONSE_CHARS: usize = 100_000;

pub const TRUNCATION_NOTICE: &str = "\n\n[Response truncated due to length]";

/// Get the HTTP port
pub fn port() -> u16 {
    env::var(env_vars::PORT)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults::PORT)
}

/// Get the notes directory
pub fn notes_dir() -> PathBuf {
    env::var(env_vars::NOTES_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(defaults::NOTES_DIR))
}

/// Get the file operation worker count (at least 1)
pub fn file_workers() -> usize {
    env::var(env_vars::FILE_WORKERS)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults::FILE_WORKERS)
        .max(1)
}

/// Get the pending queue capacity for file operations
pub fn max_pending() -> usize {
    env::var(env_vars::MAX_PENDING)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults::MAX_PENDING)
}
