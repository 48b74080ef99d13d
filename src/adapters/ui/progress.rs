//! ProgressPort implementations: plain tracing events, or tracing plus an indicatif bar.

use crate::domain::{ChatId, DomainError, EnrichedChat, Field};
use crate::ports::ProgressPort;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

/// Log-only reporter. Used when the run is not interactive.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl ProgressPort for TracingReporter {
    fn started(&self, total: usize) {
        info!(total, "enriching chats");
    }

    fn enriched(&self, chat: &EnrichedChat) {
        info!(
            chat_id = chat.chat_id,
            members = chat.member_count,
            "processed: {}",
            chat.title
        );
    }

    fn degraded(&self, chat_id: ChatId, field: Field, reason: &DomainError) {
        warn!(chat_id, %field, error = %reason, "field unavailable, using default");
    }

    fn skipped(&self, chat_id: ChatId, reason: &DomainError) {
        warn!(chat_id, error = %reason, "chat skipped");
    }

    fn finished(&self, enriched: usize, requested: usize) {
        info!(enriched, requested, "enrichment finished");
    }
}

/// Progress bar over the identifiers. Log lines are printed above the bar.
pub struct ProgressBarReporter {
    bar: ProgressBar,
    log: TracingReporter,
}

impl ProgressBarReporter {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}",
        )
        .map(|s| s.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        let bar = ProgressBar::new(0);
        bar.set_style(style);
        Self {
            bar,
            log: TracingReporter,
        }
    }
}

impl Default for ProgressBarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressPort for ProgressBarReporter {
    fn started(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.suspend(|| self.log.started(total));
    }

    fn enriched(&self, chat: &EnrichedChat) {
        self.bar.set_message(chat.title.clone());
        self.bar.inc(1);
        self.bar.suspend(|| self.log.enriched(chat));
    }

    fn degraded(&self, chat_id: ChatId, field: Field, reason: &DomainError) {
        self.bar.suspend(|| self.log.degraded(chat_id, field, reason));
    }

    fn skipped(&self, chat_id: ChatId, reason: &DomainError) {
        self.bar.inc(1);
        self.bar.suspend(|| self.log.skipped(chat_id, reason));
    }

    fn finished(&self, enriched: usize, requested: usize) {
        self.bar.finish_and_clear();
        self.log.finished(enriched, requested);
    }
}
