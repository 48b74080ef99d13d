//! Validate the bot credential before any chat is touched.

use crate::domain::{BotIdentity, DomainError};
use crate::ports::ChatGateway;
use crate::usecases::enricher::{bounded, DEFAULT_CALL_TIMEOUT};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct AuthService {
    gateway: Arc<dyn ChatGateway>,
    call_timeout: Duration,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            gateway,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Call `getMe`. Only a rejected credential comes back as `DomainError::Auth`;
    /// transport failures and timeouts keep their own variant.
    pub async fn authenticate(&self) -> Result<BotIdentity, DomainError> {
        let me = bounded(self.call_timeout, self.gateway.get_me()).await?;
        info!(
            bot_id = me.id,
            username = me.username.as_deref().unwrap_or("-"),
            "connected as {}",
            me.first_name
        );
        Ok(me)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::ScriptedGateway;

    #[tokio::test]
    async fn valid_token_returns_identity() {
        let svc = AuthService::new(Arc::new(ScriptedGateway::new()));
        let me = svc.authenticate().await.unwrap();
        assert_eq!(me.username.as_deref(), Some("report_bot"));
    }

    #[tokio::test]
    async fn rejected_token_is_auth_error() {
        let svc = AuthService::new(Arc::new(ScriptedGateway::unauthorized()));
        let err = svc.authenticate().await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(_)));
    }

    #[tokio::test]
    async fn network_failure_is_not_credential_rejection() {
        let svc = AuthService::new(Arc::new(ScriptedGateway::unreachable()));
        let err = svc.authenticate().await.unwrap_err();
        assert!(matches!(err, DomainError::Gateway(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn slow_identity_check_is_timeout() {
        let gateway = ScriptedGateway::new().slow_identity(Duration::from_millis(300));
        let svc = AuthService::new(Arc::new(gateway)).with_call_timeout(Duration::from_millis(30));
        let err = svc.authenticate().await.unwrap_err();
        assert!(matches!(err, DomainError::Timeout(30)), "got {:?}", err);
    }
}
