//! Public handle for the live-feed connection.

use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};

use crate::connection::connection_loop;
use crate::types::{LiveConfig, LiveEvent};

/// Handle for the live-feed connection.
pub struct LiveClient {
    connected: Arc<RwLock<bool>>,
}

impl LiveClient {
    /// Create a client and start the background connection.
    /// Returns `(client, event_receiver)`.
    pub fn connect(config: LiveConfig) -> (Self, mpsc::Receiver<LiveEvent>) {
        let (event_tx, event_rx) = mpsc::channel(256);
        let connected = Arc::new(RwLock::new(false));

        let client = Self {
            connected: Arc::clone(&connected),
        };

        tokio::spawn(connection_loop(config, connected, event_tx));

        (client, event_rx)
    }

    /// Whether the gateway socket is currently open.
    pub async fn is_connected(&self) -> bool {
        *self.connected.read().await
    }
}
