//! Inbound port. UI (adapter) feeds run parameters into the application.

use crate::domain::DomainError;

/// Input port: asks the operator for whatever configuration did not provide.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Bot token (from @BotFather).
    async fn ask_bot_token(&self) -> Result<String, DomainError>;

    /// Path of the file with chat IDs. `default` is used on empty input.
    async fn ask_ids_file(&self, default: &str) -> Result<String, DomainError>;
}
