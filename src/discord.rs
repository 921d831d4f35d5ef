//! Supports reading thread metadata from, and posting plaintext messages to,
//! the Discord API with a user credential.
//!
//! The surface is intentionally tiny: one metadata read and one message
//! create, both against [api::DiscordClient].

pub mod api;
pub mod auth;
pub mod channel;
pub mod error;
pub mod message;
