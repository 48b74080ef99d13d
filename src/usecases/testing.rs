//! In-memory test doubles shared by use case tests.

use crate::domain::{
    BotIdentity, ChatId, ChatInfo, DomainError, EnrichedChat, Field,
};
use crate::ports::{ChatGateway, ProgressPort};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Scripted answers for one chat. Unset optional answers fail like a missing permission.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChat {
    title: Option<String>,
    username: Option<String>,
    invite_link: Option<String>,
    members: Option<u64>,
    exported: Option<String>,
    delay: Option<Duration>,
}

impl ScriptedChat {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn members(mut self, n: u64) -> Self {
        self.members = Some(n);
        self
    }

    pub fn with_invite(mut self, link: Option<&str>) -> Self {
        self.invite_link = link.map(String::from);
        self
    }

    pub fn with_username(mut self, username: Option<&str>) -> Self {
        self.username = username.map(String::from);
        self
    }

    pub fn exporting(mut self, link: &str) -> Self {
        self.exported = Some(link.to_string());
        self
    }

    /// Delay applied to `get_chat`.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn info(&self, id: ChatId) -> ChatInfo {
        ChatInfo {
            id,
            title: self.title.clone(),
            username: self.username.clone(),
            invite_link: self.invite_link.clone(),
        }
    }
}

/// Gateway answering from a fixed script and recording every call.
#[derive(Default)]
pub struct ScriptedGateway {
    chats: HashMap<ChatId, ScriptedChat>,
    me: Option<BotIdentity>,
    offline: bool,
    me_delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    /// Gateway with a valid bot identity and no accessible chats.
    pub fn new() -> Self {
        Self {
            me: Some(BotIdentity {
                id: 1,
                first_name: "Report Bot".into(),
                username: Some("report_bot".into()),
            }),
            ..Self::default()
        }
    }

    /// Gateway whose credential is rejected.
    pub fn unauthorized() -> Self {
        Self::default()
    }

    /// Gateway whose `get_me` fails before reaching Telegram.
    pub fn unreachable() -> Self {
        Self {
            offline: true,
            ..Self::new()
        }
    }

    /// Delay applied to `get_me`.
    pub fn slow_identity(mut self, delay: Duration) -> Self {
        self.me_delay = Some(delay);
        self
    }

    pub fn chat(mut self, id: ChatId, chat: ScriptedChat) -> Self {
        self.chats.insert(id, chat);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn lookup(&self, chat_id: ChatId) -> Result<&ScriptedChat, DomainError> {
        self.chats
            .get(&chat_id)
            .ok_or_else(|| DomainError::Gateway("Bad Request: chat not found".into()))
    }
}

#[async_trait::async_trait]
impl ChatGateway for ScriptedGateway {
    async fn get_me(&self) -> Result<BotIdentity, DomainError> {
        self.record("get_me".into());
        if let Some(delay) = self.me_delay {
            tokio::time::sleep(delay).await;
        }
        if self.offline {
            return Err(DomainError::Gateway(
                "getMe: error sending request: connection refused".into(),
            ));
        }
        self.me
            .clone()
            .ok_or_else(|| DomainError::Auth("Unauthorized".into()))
    }

    async fn get_chat(&self, chat_id: ChatId) -> Result<ChatInfo, DomainError> {
        self.record(format!("get_chat {}", chat_id));
        let chat = self.lookup(chat_id)?;
        if let Some(delay) = chat.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(chat.info(chat_id))
    }

    async fn get_member_count(&self, chat_id: ChatId) -> Result<u64, DomainError> {
        self.record(format!("get_member_count {}", chat_id));
        self.lookup(chat_id)?
            .members
            .ok_or_else(|| DomainError::Gateway("Bad Request: member list is inaccessible".into()))
    }

    async fn export_invite_link(&self, chat_id: ChatId) -> Result<String, DomainError> {
        self.record(format!("export_invite_link {}", chat_id));
        self.lookup(chat_id)?
            .exported
            .clone()
            .ok_or_else(|| DomainError::Gateway("Bad Request: not enough rights".into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(usize),
    Enriched(ChatId),
    Degraded(ChatId, Field),
    Skipped(ChatId),
    Finished(usize, usize),
}

/// ProgressPort that remembers every event in order.
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<Event>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressPort for RecordingProgress {
    fn started(&self, total: usize) {
        self.push(Event::Started(total));
    }

    fn enriched(&self, chat: &EnrichedChat) {
        self.push(Event::Enriched(chat.chat_id));
    }

    fn degraded(&self, chat_id: ChatId, field: Field, _reason: &DomainError) {
        self.push(Event::Degraded(chat_id, field));
    }

    fn skipped(&self, chat_id: ChatId, _reason: &DomainError) {
        self.push(Event::Skipped(chat_id));
    }

    fn finished(&self, enriched: usize, requested: usize) {
        self.push(Event::Finished(enriched, requested));
    }
}
