//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{BotIdentity, ChatId, ChatInfo, DomainError, EnrichedChat, Field, Report};
use std::path::PathBuf;

/// Telegram capability used by the pipeline. One call per method per identifier; no retries.
#[async_trait::async_trait]
pub trait ChatGateway: Send + Sync {
    /// Validate the credential and return the bot behind it.
    async fn get_me(&self) -> Result<BotIdentity, DomainError>;

    /// Fetch base chat attributes. Fails on unknown ids or missing access.
    async fn get_chat(&self, chat_id: ChatId) -> Result<ChatInfo, DomainError>;

    /// Number of members. Fails when not permitted or unavailable.
    async fn get_member_count(&self, chat_id: ChatId) -> Result<u64, DomainError>;

    /// Mint a fresh primary invite link. Requires admin rights.
    async fn export_invite_link(&self, chat_id: ChatId) -> Result<String, DomainError>;
}

/// Turns a finished report into a document. Pure formatting, no I/O.
pub trait RendererPort: Send + Sync {
    fn render(&self, report: &Report) -> Result<String, DomainError>;

    /// File extension of the produced document, without the dot.
    fn extension(&self) -> &'static str;
}

/// Persists a rendered document and returns where it went.
#[async_trait::async_trait]
pub trait ReportSinkPort: Send + Sync {
    async fn write(&self, document: &str) -> Result<PathBuf, DomainError>;
}

/// Source of the raw identifier payload (file or equivalent byte source).
#[async_trait::async_trait]
pub trait PayloadSourcePort: Send + Sync {
    async fn read_payload(&self) -> Result<String, DomainError>;
}

/// Injected reporter for pipeline events. Replaces ambient logging inside use cases.
pub trait ProgressPort: Send + Sync {
    fn started(&self, total: usize);

    fn enriched(&self, chat: &EnrichedChat);

    /// An optional field fell back to its default.
    fn degraded(&self, chat_id: ChatId, field: Field, reason: &DomainError);

    /// The required fetch failed; the identifier is dropped.
    fn skipped(&self, chat_id: ChatId, reason: &DomainError);

    fn finished(&self, enriched: usize, requested: usize);
}
