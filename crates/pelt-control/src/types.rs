//! Configuration and event/command types for the control client.

use crate::protocol::OutboundRequest;

/// Configuration for the control-socket connection.
#[derive(Debug, Clone)]
pub struct ControlConfig {
    /// WebSocket endpoint of the control application.
    pub url: String,
    /// Reconnect base delay in seconds.
    pub reconnect_delay_secs: u64,
    /// Maximum reconnect delay in seconds.
    pub max_reconnect_delay_secs: u64,
    /// Per-attempt connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:42069/websocket".into(),
            reconnect_delay_secs: 1,
            max_reconnect_delay_secs: 30,
            connect_timeout_secs: 15,
        }
    }
}

/// Events emitted by the control client.
#[derive(Debug, Clone)]
pub enum ControlEvent {
    /// Socket opened; catalog requests have been sent.
    Connected,
    /// Socket closed or errored; a reconnect is scheduled.
    Disconnected,
    /// A catalog response was merged into the caches.
    CatalogUpdated { items: usize, triggers: usize },
    /// Connection attempt failure.
    Error(String),
}

/// Commands sent to the background connection task.
#[derive(Debug)]
pub(crate) enum ControlCommand {
    Send(OutboundRequest),
    Disconnect,
}

/// What `trigger_event` resolved an event to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Event kind disabled or absent from settings; nothing sent.
    Skipped,
    /// A named custom trigger was activated.
    Activated { trigger: String },
    /// A weighted throw was sent.
    Thrown { points: u32 },
}
