//! Wire messages for the control socket.
//!
//! JSON messages keyed by a `requestID` field. Outbound covers the four
//! request kinds the bridge sends; inbound covers the two catalog
//! responses it handles. Everything else the server sends is ignored.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogId;

/// Outbound control-socket request.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "requestID", rename_all = "camelCase")]
pub enum OutboundRequest {
    AvailableItems,
    AvailableTriggers,
    ActivateTrigger { data: ActivateTriggerData },
    ThrowItems { data: ThrowItemsData },
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivateTriggerData {
    #[serde(rename = "triggerID")]
    pub trigger_id: CatalogId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowItemsData {
    pub amount_of_throws: u32,
    pub delay_time: f64,
    pub items: Vec<CatalogId>,
}

/// Inbound control-socket message. Only the catalog responses carry
/// data the bridge uses; `Unhandled` swallows every other request kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "requestID", rename_all = "camelCase")]
pub enum InboundMessage {
    AvailableItems {
        #[serde(default)]
        data: ItemsPayload,
    },
    AvailableTriggers {
        #[serde(default)]
        data: TriggersPayload,
    },
    #[serde(other)]
    Unhandled,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemsPayload {
    #[serde(default)]
    pub items: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggersPayload {
    #[serde(default)]
    pub triggers: Vec<CatalogEntry>,
}

/// One `{name, ID}` pair from a catalog response.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(rename = "ID")]
    pub id: CatalogId,
}
