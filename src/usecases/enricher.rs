//! Per-chat enrichment: required `getChat`, then optional member count and invite link,
//! then the creation date estimate.
//!
//! - Only a failed `getChat` drops an identifier; optional steps fall back to defaults
//! - Failures never leave `enrich`; they are handed to the injected ProgressPort
//! - Every remote call is bounded by `call_timeout` and attempted exactly once
//! - `enrich_all` runs up to `concurrency` identifiers at once but yields results in input order

use crate::domain::{ChatId, DomainError, EnrichedChat, Enrichment, Field, UNTITLED_CHAT};
use crate::ports::{ChatGateway, ProgressPort};
use crate::usecases::creation_date::estimate_creation;
use crate::usecases::invite::InviteChain;
use futures::stream::{self, StreamExt};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Default per-call timeout for remote calls.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(15);

/// Run a remote call under a timeout; expiry becomes `DomainError::Timeout`.
pub(crate) async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(DomainError::Timeout(limit.as_millis() as u64)),
    }
}

/// Enrichment service. Turns bare chat ids into report rows.
pub struct EnrichService {
    gateway: Arc<dyn ChatGateway>,
    progress: Arc<dyn ProgressPort>,
    invite_chain: InviteChain,
    call_timeout: Duration,
    concurrency: usize,
}

impl EnrichService {
    /// Sequential service with the default invite chain and timeout.
    pub fn new(gateway: Arc<dyn ChatGateway>, progress: Arc<dyn ProgressPort>) -> Self {
        Self {
            gateway,
            progress,
            invite_chain: InviteChain::default(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
            concurrency: 1,
        }
    }

    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Number of identifiers enriched at once. Values below 1 are treated as 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Enrich a single identifier. Never returns an error: a failed `getChat` yields `Skipped`.
    pub async fn enrich(&self, chat_id: ChatId) -> Enrichment {
        let chat = match bounded(self.call_timeout, self.gateway.get_chat(chat_id)).await {
            Ok(chat) => chat,
            Err(reason) => {
                self.progress.skipped(chat_id, &reason);
                return Enrichment::Skipped { chat_id, reason };
            }
        };

        let member_count =
            match bounded(self.call_timeout, self.gateway.get_member_count(chat_id)).await {
                Ok(n) => n,
                Err(e) => {
                    self.progress.degraded(chat_id, Field::MemberCount, &e);
                    0
                }
            };

        let invite = self
            .invite_chain
            .resolve(self.gateway.as_ref(), &chat, self.call_timeout)
            .await;
        if invite.link.is_none() {
            let reason = invite.last_error.unwrap_or_else(|| {
                DomainError::Gateway("no invite link strategy produced a link".into())
            });
            self.progress.degraded(chat_id, Field::InviteLink, &reason);
        }

        let title = chat
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED_CHAT)
            .to_string();

        let enriched = EnrichedChat {
            chat_id,
            title,
            member_count,
            created: estimate_creation(chat_id),
            invite_link: invite.link,
        };
        self.progress.enriched(&enriched);
        Enrichment::Enriched(enriched)
    }

    /// Enrich every identifier and keep the successes, in input order.
    pub async fn enrich_all(&self, chat_ids: &[ChatId]) -> Vec<EnrichedChat> {
        self.progress.started(chat_ids.len());

        let enriched: Vec<EnrichedChat> = stream::iter(chat_ids.iter().copied())
            .map(|chat_id| self.enrich(chat_id))
            .buffered(self.concurrency)
            .filter_map(|outcome| futures::future::ready(outcome.into_enriched()))
            .collect()
            .await;

        self.progress.finished(enriched.len(), chat_ids.len());
        enriched
    }
}
