//! Client for the local item-throwing control socket.
//!
//! Maintains a WebSocket connection to the control application using
//! `tokio-tungstenite`, with auto-reconnect and bounded exponential
//! backoff. Caches the server-provided item and trigger catalogs and
//! resolves normalized live-feed events into either a named trigger
//! activation or a weighted batch throw.

mod catalog;
mod client;
mod connection;
mod protocol;
mod router;
mod types;

pub use catalog::{Catalog, CatalogId};
pub use client::ControlClient;
pub use protocol::{
    ActivateTriggerData, CatalogEntry, InboundMessage, OutboundRequest, ThrowItemsData,
};
pub use types::{ControlConfig, ControlEvent, TriggerOutcome};
