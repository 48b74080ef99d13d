//! Infrastructure adapters. Implement outbound ports.
//!
//! Telegram Bot API, filesystem, renderers, terminal UI. Map errors to DomainError.

pub mod persistence;
pub mod render;
pub mod telegram;
pub mod ui;
