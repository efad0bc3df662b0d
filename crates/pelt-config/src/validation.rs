//! Settings validation, collecting all errors into a single
//! `ConfigError::ValidationError`.

use pelt_common::ConfigError;

use crate::schema::Settings;

/// Run all validations on a settings document.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if settings.channel.trim().is_empty() {
        errors.push("channel must be set".into());
    }

    validate_ws_url(&mut errors, "control.url", &settings.control.url);
    validate_ws_url(&mut errors, "live.gatewayUrl", &settings.live.gateway_url);

    validate_reconnect(
        &mut errors,
        "control",
        settings.control.reconnect_delay_secs,
        settings.control.max_reconnect_delay_secs,
    );
    validate_reconnect(
        &mut errors,
        "live",
        settings.live.reconnect_delay_secs,
        settings.live.max_reconnect_delay_secs,
    );

    for (kind, event) in &settings.events {
        let prefix = format!("events.{kind}");
        if event.items_per_point <= 0.0 || !event.items_per_point.is_finite() {
            errors.push(format!("{prefix}.itemsPerPoint must be a positive number"));
        }
        if event.max_throws < 1 {
            errors.push(format!("{prefix}.maxThrows must be >= 1"));
        }
        if event.delay < 0.0 || !event.delay.is_finite() {
            errors.push(format!("{prefix}.delay must be >= 0"));
        }
        if let Some(name) = &event.custom_trigger_name {
            if name.trim().is_empty() {
                errors.push(format!("{prefix}.customTriggerName must not be blank"));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_ws_url(errors: &mut Vec<String>, field: &str, url: &str) {
    if !url.starts_with("ws://") && !url.starts_with("wss://") {
        errors.push(format!("{field} must be a ws:// or wss:// URL"));
    }
}

fn validate_reconnect(errors: &mut Vec<String>, section: &str, base: u64, max: u64) {
    if base < 1 {
        errors.push(format!("{section}.reconnectDelaySecs must be >= 1"));
    }
    if max < base {
        errors.push(format!(
            "{section}.maxReconnectDelaySecs must be >= reconnectDelaySecs"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pelt_common::{EventKind, EventSettings};

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.channel = "streamer".into();
        settings
    }

    #[test]
    fn default_with_channel_is_valid() {
        assert!(validate(&valid_settings()).is_ok());
    }

    #[test]
    fn empty_channel_is_rejected() {
        let settings = Settings::default();
        let err = validate(&settings).unwrap_err();
        assert!(err.to_string().contains("channel must be set"));
    }

    #[test]
    fn non_ws_url_is_rejected() {
        let mut settings = valid_settings();
        settings.control.url = "http://127.0.0.1:42069".into();
        let err = validate(&settings).unwrap_err();
        assert!(err.to_string().contains("control.url"));
    }

    #[test]
    fn reconnect_cap_below_base_is_rejected() {
        let mut settings = valid_settings();
        settings.live.reconnect_delay_secs = 10;
        settings.live.max_reconnect_delay_secs = 5;
        let err = validate(&settings).unwrap_err();
        assert!(err.to_string().contains("live.maxReconnectDelaySecs"));
    }

    #[test]
    fn bad_event_settings_collect_all_errors() {
        let mut settings = valid_settings();
        settings.events.insert(
            EventKind::Gift,
            EventSettings {
                enabled: true,
                items_per_point: 0.0,
                max_throws: 0,
                delay: -1.0,
                ..Default::default()
            },
        );
        let err = validate(&settings).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("events.gift.itemsPerPoint"));
        assert!(message.contains("events.gift.maxThrows"));
        assert!(message.contains("events.gift.delay"));
    }

    #[test]
    fn blank_custom_trigger_name_is_rejected() {
        let mut settings = valid_settings();
        settings.events.insert(
            EventKind::Share,
            EventSettings {
                enabled: true,
                custom_trigger_name: Some("   ".into()),
                ..Default::default()
            },
        );
        let err = validate(&settings).unwrap_err();
        assert!(err.to_string().contains("events.share.customTriggerName"));
    }
}
