//! Domain entities. Pure data structures for the core business.
//!
//! No Telegram/IO types here — these are mapped from adapters.

use chrono::{DateTime, Local, NaiveDate};
use serde::Deserialize;
use std::fmt;

use super::errors::DomainError;

/// Signed Telegram chat identifier (Bot API form, e.g. `-1001234567890`). Zero is never valid.
pub type ChatId = i64;

/// Title used when the remote chat has none.
pub const UNTITLED_CHAT: &str = "Untitled chat";

/// Bot API `type` of a chat. Only read while mapping; private chats get a display-name title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// Base attributes returned by the required `getChat` step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatInfo {
    pub id: ChatId,
    pub title: Option<String>,
    /// Public handle without the leading `@`.
    pub username: Option<String>,
    /// Primary invite link, only visible to administrators.
    pub invite_link: Option<String>,
}

/// The bot account behind the credential, as returned by `getMe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    pub id: i64,
    pub first_name: String,
    pub username: Option<String>,
}

/// Approximate creation date derived from the chat identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationEstimate {
    Date(NaiveDate),
    Unknown,
}

impl fmt::Display for CreationEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreationEstimate::Date(d) => write!(f, "{}", d.format("%d/%m/%Y")),
            CreationEstimate::Unknown => f.write_str("Unknown"),
        }
    }
}

/// One fully described chat row of the report. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedChat {
    pub chat_id: ChatId,
    pub title: String,
    /// 0 when the count could not be fetched.
    pub member_count: u64,
    pub created: CreationEstimate,
    /// `None` when no invite link could be resolved.
    pub invite_link: Option<String>,
}

/// Optional field that can be downgraded to a default without dropping the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MemberCount,
    InviteLink,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::MemberCount => f.write_str("member_count"),
            Field::InviteLink => f.write_str("invite_link"),
        }
    }
}

/// Result of enriching a single identifier.
#[derive(Debug)]
pub enum Enrichment {
    Enriched(EnrichedChat),
    /// The required fetch failed; the identifier is excluded from the report.
    Skipped { chat_id: ChatId, reason: DomainError },
}

impl Enrichment {
    pub fn into_enriched(self) -> Option<EnrichedChat> {
        match self {
            Enrichment::Enriched(chat) => Some(chat),
            Enrichment::Skipped { .. } => None,
        }
    }
}

/// Sorted records plus the moment the report was generated. Built once, then only read.
#[derive(Debug, Clone)]
pub struct Report {
    pub chats: Vec<EnrichedChat>,
    pub generated_at: DateTime<Local>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_estimate_display() {
        let d = NaiveDate::from_ymd_opt(2001, 9, 23).unwrap();
        assert_eq!(CreationEstimate::Date(d).to_string(), "23/09/2001");
        assert_eq!(CreationEstimate::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn skipped_is_not_enriched() {
        let s = Enrichment::Skipped {
            chat_id: 7,
            reason: DomainError::Gateway("chat not found".into()),
        };
        assert!(s.into_enriched().is_none());
    }
}
