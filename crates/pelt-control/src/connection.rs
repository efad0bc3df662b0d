//! Background WebSocket connection loop with auto-reconnect.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, Mutex, RwLock};
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{debug, error, info, warn};

use crate::catalog::Catalog;
use crate::protocol::{InboundMessage, OutboundRequest};
use crate::types::{ControlCommand, ControlConfig, ControlEvent};

/// Background task managing the control-socket connection.
///
/// Per successful open: readiness is raised, the two catalog requests
/// are sent exactly once, and the read loop merges catalog responses
/// until the socket closes or errors. Reconnects with exponential
/// backoff starting at the configured base delay and capped at the
/// configured maximum; the delay resets on a successful open.
pub(crate) async fn connection_loop(
    config: ControlConfig,
    ready: Arc<RwLock<bool>>,
    items: Arc<RwLock<Catalog>>,
    triggers: Arc<RwLock<Catalog>>,
    event_tx: mpsc::Sender<ControlEvent>,
    command_rx: mpsc::Receiver<ControlCommand>,
) {
    let command_rx = Arc::new(Mutex::new(command_rx));
    let mut reconnect_delay = config.reconnect_delay_secs;

    loop {
        info!(url = %config.url, "connecting to control socket");

        match tokio::time::timeout(
            Duration::from_secs(config.connect_timeout_secs),
            tokio_tungstenite::connect_async(&config.url),
        )
        .await
        {
            Ok(Ok((ws_stream, _))) => {
                reconnect_delay = config.reconnect_delay_secs;
                *ready.write().await = true;
                info!("control socket connected");
                let _ = event_tx.send(ControlEvent::Connected).await;

                let (ws_write, mut ws_read) = ws_stream.split();
                let ws_write = Arc::new(Mutex::new(ws_write));

                // Request both catalogs, once per open.
                for request in [
                    OutboundRequest::AvailableItems,
                    OutboundRequest::AvailableTriggers,
                ] {
                    if let Ok(json) = serde_json::to_string(&request) {
                        let mut writer = ws_write.lock().await;
                        let _ = writer.send(WsMessage::Text(json.into())).await;
                    }
                }

                // Spawn command forwarder.
                let cmd_write = Arc::clone(&ws_write);
                let cmd_rx = Arc::clone(&command_rx);
                let cmd_handle = tokio::spawn(command_forwarder(cmd_rx, cmd_write));

                while let Some(msg_result) = ws_read.next().await {
                    match msg_result {
                        Ok(WsMessage::Text(text)) => {
                            if let Ok(msg) = serde_json::from_str::<InboundMessage>(&text) {
                                handle_inbound(msg, &items, &triggers, &event_tx).await;
                            } else {
                                debug!(text = %text, "unrecognized control message");
                            }
                        }
                        Ok(WsMessage::Close(_)) => {
                            info!("control socket closed by server");
                            break;
                        }
                        Err(e) => {
                            warn!(error = %e, "control socket error");
                            break;
                        }
                        _ => {}
                    }
                }

                cmd_handle.abort();
                *ready.write().await = false;
                let _ = event_tx.send(ControlEvent::Disconnected).await;
            }
            Ok(Err(e)) => {
                error!(error = %e, "failed to connect to control socket");
                let _ = event_tx
                    .send(ControlEvent::Error(format!("connection failed: {e}")))
                    .await;
            }
            Err(_elapsed) => {
                error!(
                    timeout_secs = config.connect_timeout_secs,
                    "control socket connection timed out"
                );
                let _ = event_tx
                    .send(ControlEvent::Error("connection timed out".into()))
                    .await;
            }
        }

        info!(delay_secs = reconnect_delay, "reconnecting to control socket");
        tokio::time::sleep(Duration::from_secs(reconnect_delay)).await;
        reconnect_delay = (reconnect_delay * 2).min(config.max_reconnect_delay_secs);
    }
}

/// Merge a catalog response into the caches. Other message kinds are
/// dropped here.
async fn handle_inbound(
    msg: InboundMessage,
    items: &Arc<RwLock<Catalog>>,
    triggers: &Arc<RwLock<Catalog>>,
    event_tx: &mpsc::Sender<ControlEvent>,
) {
    match msg {
        InboundMessage::AvailableItems { data } => {
            let mut cache = items.write().await;
            cache.merge(data.items);
            let items_len = cache.len();
            drop(cache);
            let triggers_len = triggers.read().await.len();
            debug!(items = items_len, "item catalog updated");
            let _ = event_tx
                .send(ControlEvent::CatalogUpdated {
                    items: items_len,
                    triggers: triggers_len,
                })
                .await;
        }
        InboundMessage::AvailableTriggers { data } => {
            let mut cache = triggers.write().await;
            cache.merge(data.triggers);
            let triggers_len = cache.len();
            drop(cache);
            let items_len = items.read().await.len();
            debug!(triggers = triggers_len, "trigger catalog updated");
            let _ = event_tx
                .send(ControlEvent::CatalogUpdated {
                    items: items_len,
                    triggers: triggers_len,
                })
                .await;
        }
        InboundMessage::Unhandled => {}
    }
}

/// Forward queued requests onto the socket. Aborted when the connection
/// drops; a `Disconnect` command closes the socket and ends the task.
async fn command_forwarder<S>(cmd_rx: Arc<Mutex<mpsc::Receiver<ControlCommand>>>, cmd_write: Arc<Mutex<S>>)
where
    S: futures_util::Sink<WsMessage> + Unpin,
{
    let mut rx = cmd_rx.lock().await;
    while let Some(cmd) = rx.recv().await {
        match cmd {
            ControlCommand::Send(request) => {
                if let Ok(json) = serde_json::to_string(&request) {
                    let mut writer = cmd_write.lock().await;
                    let _ = writer.send(WsMessage::Text(json.into())).await;
                }
            }
            ControlCommand::Disconnect => {
                let mut writer = cmd_write.lock().await;
                let _ = writer.send(WsMessage::Close(None)).await;
                return;
            }
        }
    }
}
