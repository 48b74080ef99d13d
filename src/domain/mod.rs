//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    BotIdentity, ChatId, ChatInfo, ChatType, CreationEstimate, EnrichedChat, Enrichment, Field,
    Report, UNTITLED_CHAT,
};
pub use errors::DomainError;
