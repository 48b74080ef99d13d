//! Telegram Bot API adapter.

pub mod client;
pub mod mapper;

pub use client::{BotApiGateway, DEFAULT_API_BASE};
