//! Implements ChatGateway over the Telegram Bot HTTP API.
//!
//! One POST per call, no retries. The bot token is part of the request URL, so
//! every reqwest error is stripped of its URL before it reaches a log line.

use crate::adapters::telegram::mapper::{self, ApiResponse, ChatDto, UserDto};
use crate::domain::{BotIdentity, ChatId, ChatInfo, DomainError};
use crate::ports::ChatGateway;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Bot API gateway. Cheap to share behind an Arc; reqwest pools connections.
pub struct BotApiGateway {
    client: Client,
    api_base: String,
    token: String,
    timeout: Duration,
}

impl BotApiGateway {
    /// `timeout` bounds every request end to end.
    pub fn new(
        api_base: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tg-chat-report/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Config(format!("http client: {}", e)))?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.into(),
            timeout,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<T, DomainError> {
        let envelope = self.fetch(method, body).await?;
        mapper::unwrap_response(method, envelope)
    }

    /// POST and decode the envelope without interpreting `ok`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse<T>, DomainError> {
        let res = self
            .client
            .post(self.method_url(method))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(method, e))?;
        let status = res.status();
        let envelope: ApiResponse<T> = res.json().await.map_err(|e| {
            DomainError::Gateway(format!(
                "{}: unreadable response (HTTP {}): {}",
                method,
                status,
                e.without_url()
            ))
        })?;
        debug!(method, status = status.as_u16(), ok = envelope.ok, "bot api call");
        Ok(envelope)
    }

    fn transport_error(&self, method: &str, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::Timeout(self.timeout.as_millis() as u64)
        } else {
            DomainError::Gateway(format!("{}: {}", method, e.without_url()))
        }
    }
}

#[async_trait]
impl ChatGateway for BotApiGateway {
    async fn get_me(&self) -> Result<BotIdentity, DomainError> {
        let envelope = self.fetch::<UserDto>("getMe", json!({})).await?;
        let user = mapper::unwrap_credential_check("getMe", envelope)?;
        Ok(mapper::user_to_identity(user))
    }

    async fn get_chat(&self, chat_id: ChatId) -> Result<ChatInfo, DomainError> {
        let chat: ChatDto = self.call("getChat", json!({ "chat_id": chat_id })).await?;
        Ok(mapper::chat_to_domain(chat))
    }

    async fn get_member_count(&self, chat_id: ChatId) -> Result<u64, DomainError> {
        self.call("getChatMemberCount", json!({ "chat_id": chat_id }))
            .await
    }

    async fn export_invite_link(&self, chat_id: ChatId) -> Result<String, DomainError> {
        self.call("exportChatInviteLink", json!({ "chat_id": chat_id }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_url_joins_base_token_and_method() {
        let gw = BotApiGateway::new("http://localhost:8081/", "123:abc", Duration::from_secs(1))
            .unwrap();
        assert_eq!(gw.method_url("getMe"), "http://localhost:8081/bot123:abc/getMe");
    }

    #[tokio::test]
    async fn unreachable_server_is_gateway_error_without_token() {
        // Port 9 (discard) on localhost is closed in test environments.
        let gw = BotApiGateway::new("http://127.0.0.1:9", "123:secret", Duration::from_secs(2))
            .unwrap();
        let err = gw.get_chat(-100).await.unwrap_err();
        assert!(matches!(err, DomainError::Gateway(_) | DomainError::Timeout(_)));
        assert!(!err.to_string().contains("secret"));
    }
}
