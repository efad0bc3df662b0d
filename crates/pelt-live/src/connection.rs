//! Background connection loop for the live-feed gateway.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, RwLock};
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{debug, error, info, warn};

use crate::types::{FeedMessage, LiveConfig, LiveEvent, SubscribeRequest};

/// Background task managing the gateway connection.
///
/// Same shape and retry policy as the control-socket loop: connect with
/// a timeout, subscribe, pump events, reconnect with exponential backoff.
pub(crate) async fn connection_loop(
    config: LiveConfig,
    connected: Arc<RwLock<bool>>,
    event_tx: mpsc::Sender<LiveEvent>,
) {
    let mut reconnect_delay = config.reconnect_delay_secs;

    loop {
        info!(url = %config.gateway_url, channel = %config.channel, "connecting to live feed");

        match tokio::time::timeout(
            Duration::from_secs(config.connect_timeout_secs),
            tokio_tungstenite::connect_async(&config.gateway_url),
        )
        .await
        {
            Ok(Ok((ws_stream, _))) => {
                reconnect_delay = config.reconnect_delay_secs;
                *connected.write().await = true;

                let (mut ws_write, mut ws_read) = ws_stream.split();

                let subscribe = SubscribeRequest {
                    kind: "subscribe",
                    channel: &config.channel,
                };
                if let Ok(json) = serde_json::to_string(&subscribe) {
                    let _ = ws_write.send(WsMessage::Text(json.into())).await;
                }

                while let Some(msg_result) = ws_read.next().await {
                    match msg_result {
                        Ok(WsMessage::Text(text)) => {
                            match serde_json::from_str::<FeedMessage>(&text) {
                                Ok(msg) => {
                                    let event = msg.into_live_event();
                                    if let LiveEvent::Connected { room_id, owner } = &event {
                                        info!(
                                            channel = %config.channel,
                                            owner = %owner,
                                            room_id = %room_id,
                                            "live feed subscribed"
                                        );
                                    }
                                    let _ = event_tx.send(event).await;
                                }
                                Err(_) => {
                                    debug!(text = %text, "unrecognized feed message");
                                }
                            }
                        }
                        Ok(WsMessage::Close(_)) => {
                            info!("live feed closed connection");
                            break;
                        }
                        Err(e) => {
                            warn!(error = %e, "live feed socket error");
                            break;
                        }
                        _ => {}
                    }
                }

                *connected.write().await = false;
                let _ = event_tx.send(LiveEvent::Disconnected).await;
            }
            Ok(Err(e)) => {
                error!(error = %e, "failed to connect to live feed");
                let _ = event_tx
                    .send(LiveEvent::Error(format!("connection failed: {e}")))
                    .await;
            }
            Err(_elapsed) => {
                error!(
                    timeout_secs = config.connect_timeout_secs,
                    "live feed connection timed out"
                );
                let _ = event_tx
                    .send(LiveEvent::Error("connection timed out".into()))
                    .await;
            }
        }

        info!(delay_secs = reconnect_delay, "reconnecting to live feed");
        tokio::time::sleep(Duration::from_secs(reconnect_delay)).await;
        reconnect_delay = (reconnect_delay * 2).min(config.max_reconnect_delay_secs);
    }
}
