//! Invite link fallback chain.
//!
//! Each strategy either yields a link or passes to the next one. The chain stops
//! at the first link; when every strategy passes, the link is absent.

use crate::domain::{ChatInfo, DomainError};
use crate::ports::ChatGateway;
use crate::usecases::enricher::bounded;
use std::time::Duration;

const PUBLIC_LINK_BASE: &str = "https://t.me/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteStrategy {
    /// Link already present on the fetched chat.
    Existing,
    /// Mint a new primary link. Needs admin rights; failure is expected.
    Export,
    /// Canonical `t.me` link from the public username.
    PublicHandle,
}

/// Outcome of a single strategy.
#[derive(Debug)]
pub enum Attempt {
    Found(String),
    /// Try the next strategy. Carries the remote error, if the strategy made a call.
    Next(Option<DomainError>),
}

impl InviteStrategy {
    pub async fn attempt(
        self,
        gateway: &dyn ChatGateway,
        chat: &ChatInfo,
        call_timeout: Duration,
    ) -> Attempt {
        match self {
            InviteStrategy::Existing => non_blank(chat.invite_link.as_deref())
                .map(Attempt::Found)
                .unwrap_or(Attempt::Next(None)),
            InviteStrategy::Export => {
                match bounded(call_timeout, gateway.export_invite_link(chat.id)).await {
                    Ok(link) => non_blank(Some(link.as_str()))
                        .map(Attempt::Found)
                        .unwrap_or(Attempt::Next(None)),
                    Err(e) => Attempt::Next(Some(e)),
                }
            }
            InviteStrategy::PublicHandle => {
                non_blank(chat.username.as_deref().map(|u| u.trim_start_matches('@')))
                    .map(|handle| Attempt::Found(format!("{}{}", PUBLIC_LINK_BASE, handle)))
                    .unwrap_or(Attempt::Next(None))
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Result of running the whole chain.
#[derive(Debug)]
pub struct InviteResolution {
    pub link: Option<String>,
    /// Last remote error seen while walking the chain.
    pub last_error: Option<DomainError>,
}

/// Ordered list of strategies.
#[derive(Debug, Clone)]
pub struct InviteChain {
    strategies: Vec<InviteStrategy>,
}

impl InviteChain {
    pub fn new(strategies: Vec<InviteStrategy>) -> Self {
        Self { strategies }
    }

    pub async fn resolve(
        &self,
        gateway: &dyn ChatGateway,
        chat: &ChatInfo,
        call_timeout: Duration,
    ) -> InviteResolution {
        let mut last_error = None;
        for strategy in &self.strategies {
            match strategy.attempt(gateway, chat, call_timeout).await {
                Attempt::Found(link) => {
                    return InviteResolution {
                        link: Some(link),
                        last_error,
                    };
                }
                Attempt::Next(err) => {
                    if err.is_some() {
                        last_error = err;
                    }
                }
            }
        }
        InviteResolution {
            link: None,
            last_error,
        }
    }
}

impl Default for InviteChain {
    fn default() -> Self {
        Self::new(vec![
            InviteStrategy::Existing,
            InviteStrategy::Export,
            InviteStrategy::PublicHandle,
        ])
    }
}
