//! Client for the live-feed gateway.
//!
//! Wraps the WebSocket connection to the local gateway that re-publishes
//! a channel's live events as JSON, and re-emits them as normalized
//! gift/emote/share/chat events. Reconnects with the same bounded
//! exponential backoff as the control-socket client.

mod client;
mod connection;
mod types;

pub use client::LiveClient;
pub use types::{LiveConfig, LiveEvent};
