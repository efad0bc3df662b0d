//! Normalized live-feed events and per-event trigger policy.

use serde::{Deserialize, Serialize};

/// The live-feed event kinds the bridge understands.
///
/// `Chat` exists on the feed but is never forwarded to the control
/// socket; only gift, emote, and share can trigger throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Gift,
    Emote,
    Share,
    Chat,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Gift => "gift",
            EventKind::Emote => "emote",
            EventKind::Share => "share",
            EventKind::Chat => "chat",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A platform-agnostic event derived from the live feed's native shape.
///
/// Platform fields the trigger logic does not read are dropped during
/// normalization; the count fields are optional because not every event
/// kind carries them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizedEvent {
    /// Viewer handle the event originated from.
    pub unique_id: String,
    pub repeat_count: Option<u32>,
    pub diamond_count: Option<u32>,
    pub gift_name: Option<String>,
    pub emote_id: Option<String>,
    pub comment: Option<String>,
}

/// Trigger policy for one event kind.
///
/// All fields default so a partial settings document works; an absent
/// section behaves as `enabled: false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventSettings {
    pub enabled: bool,
    /// Named trigger to activate instead of throwing items. Only takes
    /// effect when the name is present in the trigger catalog.
    pub custom_trigger_name: Option<String>,
    pub scale_by_repeat_count: bool,
    pub scale_by_cost: bool,
    pub items_per_point: f64,
    pub max_throws: u32,
    /// Delay between throws, in seconds, passed through to the control app.
    pub delay: f64,
    /// Item names to throw; names missing from the item catalog are
    /// skipped, and an empty result falls back to the whole catalog.
    pub item_list: Vec<String>,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            custom_trigger_name: None,
            scale_by_repeat_count: false,
            scale_by_cost: false,
            items_per_point: 1.0,
            max_throws: 1000,
            delay: 0.0,
            item_list: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&EventKind::Gift).unwrap(), "\"gift\"");
        let kind: EventKind = serde_json::from_str("\"share\"").unwrap();
        assert_eq!(kind, EventKind::Share);
    }

    #[test]
    fn normalized_event_parses_camel_case() {
        let event: NormalizedEvent = serde_json::from_str(
            r#"{"uniqueId":"viewer1","giftName":"Rose","repeatCount":3,"diamondCount":1}"#,
        )
        .unwrap();
        assert_eq!(event.unique_id, "viewer1");
        assert_eq!(event.gift_name.as_deref(), Some("Rose"));
        assert_eq!(event.repeat_count, Some(3));
        assert_eq!(event.diamond_count, Some(1));
        assert_eq!(event.emote_id, None);
    }

    #[test]
    fn normalized_event_tolerates_missing_fields() {
        let event: NormalizedEvent = serde_json::from_str(r#"{"uniqueId":"viewer2"}"#).unwrap();
        assert_eq!(event.repeat_count, None);
        assert_eq!(event.diamond_count, None);
    }

    #[test]
    fn event_settings_defaults() {
        let settings: EventSettings = serde_json::from_str("{}").unwrap();
        assert!(!settings.enabled);
        assert_eq!(settings.items_per_point, 1.0);
        assert_eq!(settings.max_throws, 1000);
        assert_eq!(settings.delay, 0.0);
        assert!(settings.item_list.is_empty());
        assert!(settings.custom_trigger_name.is_none());
    }

    #[test]
    fn event_settings_parses_camel_case() {
        let settings: EventSettings = serde_json::from_str(
            r#"{"enabled":true,"scaleByRepeatCount":true,"itemsPerPoint":2.0,"maxThrows":10,"itemList":["Rose"]}"#,
        )
        .unwrap();
        assert!(settings.enabled);
        assert!(settings.scale_by_repeat_count);
        assert_eq!(settings.items_per_point, 2.0);
        assert_eq!(settings.max_throws, 10);
        assert_eq!(settings.item_list, vec!["Rose".to_string()]);
    }
}
