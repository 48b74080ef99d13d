//! Implements InputPort. Inquire-based interactive prompts.

use crate::domain::DomainError;
use crate::ports::InputPort;
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Password, PasswordDisplayMode, Text};

/// Telegram-blue prompt prefix for every inquire prompt in the process.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_answered_prompt_prefix(Styled::new("✔").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

/// TUI adapter. Inquire prompts.
#[derive(Debug, Default)]
pub struct TuiInputPort;

impl TuiInputPort {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn ask_bot_token(&self) -> Result<String, DomainError> {
        let token = Password::new("Bot token:")
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_help_message("Token issued by @BotFather")
            .prompt()
            .map_err(|e| DomainError::Prompt(e.to_string()))?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(DomainError::Prompt("bot token is required".into()));
        }
        Ok(token)
    }

    async fn ask_ids_file(&self, default: &str) -> Result<String, DomainError> {
        let path = Text::new("File with chat IDs:")
            .with_default(default)
            .prompt()
            .map_err(|e| DomainError::Prompt(e.to_string()))?;
        let path = path.trim();
        Ok(if path.is_empty() { default } else { path }.to_string())
    }
}
