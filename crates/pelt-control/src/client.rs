//! Public handle for the control-socket connection.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};
use tracing::debug;

use pelt_common::{ControlError, EventKind, EventSettings, NormalizedEvent};

use crate::catalog::Catalog;
use crate::connection::connection_loop;
use crate::protocol::{ActivateTriggerData, OutboundRequest, ThrowItemsData};
use crate::router::{self, Resolution};
use crate::types::{ControlCommand, ControlConfig, ControlEvent, TriggerOutcome};

/// Handle for the control-socket connection.
///
/// All methods are non-blocking; requests are handed to the background
/// connection task over a command channel.
pub struct ControlClient {
    command_tx: mpsc::Sender<ControlCommand>,
    ready: Arc<RwLock<bool>>,
    items: Arc<RwLock<Catalog>>,
    triggers: Arc<RwLock<Catalog>>,
    events: HashMap<EventKind, EventSettings>,
}

impl ControlClient {
    /// Create a client and start the background connection.
    /// Returns `(client, event_receiver)`.
    pub fn connect(
        config: ControlConfig,
        events: HashMap<EventKind, EventSettings>,
    ) -> (Self, mpsc::Receiver<ControlEvent>) {
        let (event_tx, event_rx) = mpsc::channel(256);
        let (command_tx, command_rx) = mpsc::channel(64);
        let ready = Arc::new(RwLock::new(false));
        let items = Arc::new(RwLock::new(Catalog::default()));
        let triggers = Arc::new(RwLock::new(Catalog::default()));

        let client = Self {
            command_tx,
            ready: Arc::clone(&ready),
            items: Arc::clone(&items),
            triggers: Arc::clone(&triggers),
            events,
        };

        tokio::spawn(connection_loop(
            config, ready, items, triggers, event_tx, command_rx,
        ));

        (client, event_rx)
    }

    /// Readiness flag: true strictly between a successful open and the
    /// next error/close. Callers must check this before dispatching.
    pub async fn is_ready(&self) -> bool {
        *self.ready.read().await
    }

    /// Resolve an event against the settings and catalogs and send the
    /// resulting request.
    ///
    /// Absent or disabled settings are a no-op, not an error. Dispatching
    /// while the socket is closed returns `ControlError::NotReady`.
    pub async fn trigger_event(
        &self,
        kind: EventKind,
        event: &NormalizedEvent,
    ) -> Result<TriggerOutcome, ControlError> {
        if !self.is_ready().await {
            return Err(ControlError::NotReady);
        }

        let Some(settings) = self.events.get(&kind) else {
            debug!(kind = %kind, "no settings for event kind, skipping");
            return Ok(TriggerOutcome::Skipped);
        };

        let resolution = {
            let items = self.items.read().await;
            let triggers = self.triggers.read().await;
            router::resolve(settings, event, &items, &triggers)
        };

        match resolution {
            Resolution::Skip => Ok(TriggerOutcome::Skipped),
            Resolution::Activate { name, id } => {
                self.send(OutboundRequest::ActivateTrigger {
                    data: ActivateTriggerData { trigger_id: id },
                })
                .await?;
                Ok(TriggerOutcome::Activated { trigger: name })
            }
            Resolution::Throw {
                points,
                delay,
                items,
            } => {
                self.send(OutboundRequest::ThrowItems {
                    data: ThrowItemsData {
                        amount_of_throws: points,
                        delay_time: delay,
                        items,
                    },
                })
                .await?;
                Ok(TriggerOutcome::Thrown { points })
            }
        }
    }

    /// Close the socket. The connection loop will still schedule a
    /// reconnect; the bridge has no orderly shutdown beyond process exit.
    pub async fn disconnect(&self) {
        let _ = self.command_tx.send(ControlCommand::Disconnect).await;
    }

    async fn send(&self, request: OutboundRequest) -> Result<(), ControlError> {
        self.command_tx
            .send(ControlCommand::Send(request))
            .await
            .map_err(|_| ControlError::SendFailed("connection task stopped".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_before_open_is_not_ready() {
        // Connects to a port nothing listens on; readiness stays false.
        let config = ControlConfig {
            url: "ws://127.0.0.1:1/websocket".into(),
            ..Default::default()
        };
        let (client, _event_rx) = ControlClient::connect(config, HashMap::new());
        assert!(!client.is_ready().await);
        let err = client
            .trigger_event(EventKind::Gift, &NormalizedEvent::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ControlError::NotReady));
    }
}
