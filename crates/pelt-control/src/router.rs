//! Event → request resolution.
//!
//! Pure logic, separated from the connection so the scoring and
//! fallback rules can be tested without a socket.

use pelt_common::{EventSettings, NormalizedEvent};

use crate::catalog::{Catalog, CatalogId};

/// Result of resolving one event against the current catalogs.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Resolution {
    /// Event kind disabled; send nothing.
    Skip,
    /// Activate the named custom trigger.
    Activate { name: String, id: CatalogId },
    /// Weighted batch throw.
    Throw {
        points: u32,
        delay: f64,
        items: Vec<CatalogId>,
    },
}

/// Resolve an event to a control-socket request.
///
/// The custom-trigger path wins whenever the configured name is present
/// in the trigger catalog; otherwise the weighted path applies, falling
/// back to every cached item when none of the configured names resolve.
pub(crate) fn resolve(
    settings: &EventSettings,
    event: &NormalizedEvent,
    items: &Catalog,
    triggers: &Catalog,
) -> Resolution {
    if !settings.enabled {
        return Resolution::Skip;
    }

    if let Some(name) = settings
        .custom_trigger_name
        .as_deref()
        .filter(|name| !name.is_empty())
    {
        if let Some(id) = triggers.get(name) {
            return Resolution::Activate {
                name: name.to_string(),
                id: id.clone(),
            };
        }
    }

    let resolved = items.resolve(&settings.item_list);
    let throw_items = if resolved.is_empty() {
        items.ids()
    } else {
        resolved
    };

    Resolution::Throw {
        points: compute_points(settings, event),
        delay: settings.delay,
        items: throw_items,
    }
}

/// Compute the throw count for the weighted path.
///
/// Starts at 1, multiplies by repeat count and diamond cost when the
/// corresponding flags are set, then by `items_per_point`, rounds, and
/// clamps to `[1, max_throws]`. Count fields missing from the event
/// coerce to the neutral multiplier 1.
pub(crate) fn compute_points(settings: &EventSettings, event: &NormalizedEvent) -> u32 {
    let mut points = 1.0_f64;
    if settings.scale_by_repeat_count {
        points *= f64::from(event.repeat_count.unwrap_or(1));
    }
    if settings.scale_by_cost {
        points *= f64::from(event.diamond_count.unwrap_or(1));
    }
    points *= settings.items_per_point;

    let max_throws = settings.max_throws.max(1);
    points.round().clamp(1.0, f64::from(max_throws)) as u32
}
