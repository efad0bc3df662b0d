//! Composition root: construct both clients and wire live events into
//! the control socket.

use tracing::{debug, info, warn};

use pelt_common::{EventKind, NormalizedEvent};
use pelt_config::Settings;
use pelt_control::{ControlClient, ControlConfig, ControlEvent, TriggerOutcome};
use pelt_live::{LiveClient, LiveConfig, LiveEvent};

pub(crate) fn control_config(settings: &Settings) -> ControlConfig {
    ControlConfig {
        url: settings.control.url.clone(),
        reconnect_delay_secs: settings.control.reconnect_delay_secs,
        max_reconnect_delay_secs: settings.control.max_reconnect_delay_secs,
        connect_timeout_secs: settings.control.connect_timeout_secs,
    }
}

pub(crate) fn live_config(settings: &Settings) -> LiveConfig {
    LiveConfig {
        gateway_url: settings.live.gateway_url.clone(),
        channel: settings.channel.clone(),
        reconnect_delay_secs: settings.live.reconnect_delay_secs,
        max_reconnect_delay_secs: settings.live.max_reconnect_delay_secs,
        connect_timeout_secs: settings.live.connect_timeout_secs,
    }
}

/// Run the bridge until the process is terminated.
pub(crate) async fn run(settings: Settings) {
    let (control, mut control_rx) =
        ControlClient::connect(control_config(&settings), settings.events.clone());
    let (_live, mut live_rx) = LiveClient::connect(live_config(&settings));

    loop {
        tokio::select! {
            Some(event) = control_rx.recv() => handle_control_event(event),
            Some(event) = live_rx.recv() => handle_live_event(&control, event).await,
            else => break,
        }
    }
}

fn handle_control_event(event: ControlEvent) {
    match event {
        ControlEvent::Connected => info!("control socket ready"),
        ControlEvent::Disconnected => warn!("control socket lost"),
        ControlEvent::CatalogUpdated { items, triggers } => {
            debug!(items, triggers, "catalogs updated");
        }
        ControlEvent::Error(message) => warn!(%message, "control socket error"),
    }
}

async fn handle_live_event(control: &ControlClient, event: LiveEvent) {
    match event {
        LiveEvent::Connected { room_id, owner } => {
            info!(%owner, %room_id, "live feed connected");
        }
        LiveEvent::Disconnected => warn!("live feed lost"),
        LiveEvent::Error(message) => warn!(%message, "live feed error"),
        LiveEvent::Platform { kind, event } => {
            log_platform_event(kind, &event);
            // Chat is on the feed but never drives the control socket.
            if kind == EventKind::Chat {
                return;
            }
            dispatch(control, kind, &event).await;
        }
    }
}

/// Forward one event into the control socket. The readiness check
/// happens here, at dispatch time, so an event arriving during a
/// control-socket outage is dropped rather than queued.
async fn dispatch(control: &ControlClient, kind: EventKind, event: &NormalizedEvent) {
    if !control.is_ready().await {
        debug!(kind = %kind, "control socket not ready, dropping event");
        return;
    }
    match control.trigger_event(kind, event).await {
        Ok(TriggerOutcome::Skipped) => debug!(kind = %kind, "event kind disabled"),
        Ok(TriggerOutcome::Activated { trigger }) => {
            info!(kind = %kind, %trigger, "activated custom trigger");
        }
        Ok(TriggerOutcome::Thrown { points }) => {
            info!(kind = %kind, points, "threw items");
        }
        Err(e) => warn!(kind = %kind, error = %e, "trigger dispatch failed"),
    }
}

fn log_platform_event(kind: EventKind, event: &NormalizedEvent) {
    match kind {
        EventKind::Gift => info!(
            viewer = %event.unique_id,
            gift = event.gift_name.as_deref().unwrap_or("?"),
            repeat = event.repeat_count.unwrap_or(1),
            "gift received"
        ),
        EventKind::Emote => info!(
            viewer = %event.unique_id,
            emote = event.emote_id.as_deref().unwrap_or("?"),
            "emote received"
        ),
        EventKind::Share => info!(viewer = %event.unique_id, "stream shared"),
        EventKind::Chat => debug!(viewer = %event.unique_id, "chat message"),
    }
}
