//! Settings schema.
//!
//! All structs use `serde(default)` so partial settings documents work;
//! missing fields take the defaults documented here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pelt_common::{EventKind, EventSettings};

/// Root settings for the bridge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Live-feed channel to watch.
    pub channel: String,
    pub control: ControlSettings,
    pub live: LiveSettings,
    /// Trigger policy per event kind. Absent kinds are never forwarded.
    pub events: HashMap<EventKind, EventSettings>,
}

/// Connection settings for the local control socket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlSettings {
    pub url: String,
    pub reconnect_delay_secs: u64,
    pub max_reconnect_delay_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:42069/websocket".into(),
            reconnect_delay_secs: 1,
            max_reconnect_delay_secs: 30,
            connect_timeout_secs: 15,
        }
    }
}

/// Connection settings for the live-feed gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiveSettings {
    pub gateway_url: String,
    pub reconnect_delay_secs: u64,
    pub max_reconnect_delay_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            gateway_url: "ws://127.0.0.1:8099/feed".into(),
            reconnect_delay_secs: 1,
            max_reconnect_delay_secs: 30,
            connect_timeout_secs: 15,
        }
    }
}
