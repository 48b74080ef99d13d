//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Payload unreadable or without a single usable identifier. Terminal for the run.
    #[error("Input error: {0}")]
    Input(String),

    /// Credential rejected by Telegram. Terminal for the run.
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Telegram gateway error: {0}")]
    Gateway(String),

    /// Rate limited by Telegram. Not retried; surfaced like any other remote error.
    #[error("FloodWait: retry after {seconds} seconds")]
    FloodWait { seconds: u64 },

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}
