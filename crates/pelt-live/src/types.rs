//! Configuration, wire messages, and the event enum for the live feed.

use serde::{Deserialize, Serialize};

use pelt_common::{EventKind, NormalizedEvent};

/// Configuration for the live-feed gateway connection.
#[derive(Debug, Clone)]
pub struct LiveConfig {
    /// WebSocket endpoint of the live-event gateway.
    pub gateway_url: String,
    /// Channel to subscribe to.
    pub channel: String,
    /// Reconnect base delay in seconds.
    pub reconnect_delay_secs: u64,
    /// Maximum reconnect delay in seconds.
    pub max_reconnect_delay_secs: u64,
    /// Per-attempt connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            gateway_url: "ws://127.0.0.1:8099/feed".into(),
            channel: String::new(),
            reconnect_delay_secs: 1,
            max_reconnect_delay_secs: 30,
            connect_timeout_secs: 15,
        }
    }
}

/// Events emitted by the live client.
#[derive(Debug, Clone)]
pub enum LiveEvent {
    /// Gateway accepted the subscription and resolved the room.
    Connected { room_id: String, owner: String },
    /// Gateway connection lost; a reconnect is scheduled.
    Disconnected,
    /// A normalized platform event.
    Platform {
        kind: EventKind,
        event: NormalizedEvent,
    },
    /// Connection attempt failure.
    Error(String),
}

/// Subscription request sent after the socket opens.
#[derive(Debug, Serialize)]
pub(crate) struct SubscribeRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub channel: &'a str,
}

/// One message from the gateway, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub(crate) enum FeedMessage {
    #[serde(rename_all = "camelCase")]
    Hello { room_id: String, owner: String },
    Gift(NormalizedEvent),
    Emote(NormalizedEvent),
    Share(NormalizedEvent),
    Chat(NormalizedEvent),
}

impl FeedMessage {
    pub(crate) fn into_live_event(self) -> LiveEvent {
        match self {
            FeedMessage::Hello { room_id, owner } => LiveEvent::Connected { room_id, owner },
            FeedMessage::Gift(event) => LiveEvent::Platform {
                kind: EventKind::Gift,
                event,
            },
            FeedMessage::Emote(event) => LiveEvent::Platform {
                kind: EventKind::Emote,
                event,
            },
            FeedMessage::Share(event) => LiveEvent::Platform {
                kind: EventKind::Share,
                event,
            },
            FeedMessage::Chat(event) => LiveEvent::Platform {
                kind: EventKind::Chat,
                event,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gift_message_parses_with_counts() {
        let msg: FeedMessage = serde_json::from_str(
            r#"{"type":"gift","uniqueId":"viewer1","giftName":"Rose","repeatCount":3,"diamondCount":1}"#,
        )
        .unwrap();
        match msg.into_live_event() {
            LiveEvent::Platform { kind, event } => {
                assert_eq!(kind, EventKind::Gift);
                assert_eq!(event.unique_id, "viewer1");
                assert_eq!(event.gift_name.as_deref(), Some("Rose"));
                assert_eq!(event.repeat_count, Some(3));
            }
            other => panic!("expected platform event, got {other:?}"),
        }
    }

    #[test]
    fn emote_and_share_parse() {
        let msg: FeedMessage =
            serde_json::from_str(r#"{"type":"emote","uniqueId":"viewer2","emoteId":"em-9"}"#)
                .unwrap();
        assert!(matches!(
            msg.into_live_event(),
            LiveEvent::Platform {
                kind: EventKind::Emote,
                ..
            }
        ));

        let msg: FeedMessage =
            serde_json::from_str(r#"{"type":"share","uniqueId":"viewer3"}"#).unwrap();
        assert!(matches!(
            msg.into_live_event(),
            LiveEvent::Platform {
                kind: EventKind::Share,
                ..
            }
        ));
    }

    #[test]
    fn hello_message_parses() {
        let msg: FeedMessage = serde_json::from_str(
            r#"{"type":"hello","roomId":"12345","owner":"streamer"}"#,
        )
        .unwrap();
        match msg.into_live_event() {
            LiveEvent::Connected { room_id, owner } => {
                assert_eq!(room_id, "12345");
                assert_eq!(owner, "streamer");
            }
            other => panic!("expected connected, got {other:?}"),
        }
    }

    #[test]
    fn unknown_type_fails_to_parse() {
        let result: Result<FeedMessage, _> =
            serde_json::from_str(r#"{"type":"follow","uniqueId":"viewer4"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn subscribe_request_shape() {
        let request = SubscribeRequest {
            kind: "subscribe",
            channel: "streamer",
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"type": "subscribe", "channel": "streamer"})
        );
    }
}
