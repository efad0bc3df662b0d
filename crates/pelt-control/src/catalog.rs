//! Name → identifier catalogs populated from control-socket responses.

use indexmap::IndexMap;

use crate::protocol::CatalogEntry;

/// Server-assigned identifier for an item or trigger. Treated as opaque
/// and passed back to the server untouched.
pub type CatalogId = serde_json::Value;

/// An insertion-ordered mapping from item/trigger name to identifier.
///
/// Entries are only ever added or overwritten during a session; nothing
/// clears the catalog on reconnect. Duplicate names are last-write-wins,
/// keeping the original insertion position.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<String, CatalogId>,
}

impl Catalog {
    pub fn merge(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) {
        for entry in entries {
            self.entries.insert(entry.name, entry.id);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CatalogId> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All identifiers in insertion order.
    pub fn ids(&self) -> Vec<CatalogId> {
        self.entries.values().cloned().collect()
    }

    /// Map `names` to identifiers, skipping names not in the catalog.
    pub fn resolve(&self, names: &[String]) -> Vec<CatalogId> {
        names
            .iter()
            .filter_map(|name| self.entries.get(name).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str, id: serde_json::Value) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            id,
        }
    }

    #[test]
    fn merge_then_lookup() {
        let mut catalog = Catalog::default();
        catalog.merge([entry("X", json!(7))]);
        assert_eq!(catalog.get("X"), Some(&json!(7)));
        assert!(catalog.contains("X"));
        assert!(!catalog.contains("Y"));
    }

    #[test]
    fn duplicate_name_overwrites() {
        let mut catalog = Catalog::default();
        catalog.merge([entry("X", json!(7))]);
        catalog.merge([entry("X", json!(9))]);
        assert_eq!(catalog.get("X"), Some(&json!(9)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn ids_preserve_insertion_order() {
        let mut catalog = Catalog::default();
        catalog.merge([
            entry("b", json!("id-b")),
            entry("a", json!("id-a")),
            entry("c", json!("id-c")),
        ]);
        // Overwrite keeps the original position.
        catalog.merge([entry("a", json!("id-a2"))]);
        assert_eq!(
            catalog.ids(),
            vec![json!("id-b"), json!("id-a2"), json!("id-c")]
        );
    }

    #[test]
    fn resolve_skips_unknown_names() {
        let mut catalog = Catalog::default();
        catalog.merge([entry("Rose", json!(1)), entry("Duck", json!(2))]);
        let resolved = catalog.resolve(&[
            "Duck".to_string(),
            "Ghost".to_string(),
            "Rose".to_string(),
        ]);
        assert_eq!(resolved, vec![json!(2), json!(1)]);
    }
}
