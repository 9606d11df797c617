//! The catalog store: a name → record map with process lifetime.
//!
//! The store is schema-agnostic. It maps composite event names to whatever
//! JSON value the caller hands it (this system always stores encoded
//! [`crate::details::EventDetails`], but the store neither knows nor
//! checks that; even `null` is a storable value). All validation happens
//! at the protocol and ledger boundaries before `upsert` is called.
//!
//! A `Catalog` is an explicitly constructed instance injected into request
//! handlers, so tests can create isolated stores at will.
//!
//! # Known limitation
//!
//! Mutation is whole-record replacement. Two concurrent reservations for
//! the same event can both read a stale record and the later `upsert`
//! silently overwrites the earlier one's effect (last write wins). Closing
//! that race needs per-name versioning or compare-and-swap, which this
//! design deliberately leaves out.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// In-memory mapping from composite event name to stored record.
#[derive(Debug, Default)]
pub struct Catalog {
    records: RwLock<HashMap<String, Value>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `name`.
    ///
    /// Returns whether a record with that name existed before the call.
    /// Either fully replaces the record or, on precondition failures in
    /// the callers, is never reached. There is no partial application.
    pub fn upsert(&self, name: impl Into<String>, value: Value) -> bool {
        let name = name.into();
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let existed = records.insert(name.clone(), value).is_some();
        tracing::debug!(%name, existed, "catalog upsert");
        existed
    }

    /// Exact-match retrieval. Returns a clone of the stored value; callers
    /// never hold a reference into the store.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// All `(name, record)` pairs. Order is unspecified; consumers must
    /// impose their own ordering for display.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every record. Test reset; nothing in the serving path calls
    /// this.
    pub fn clear(&self) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upsert_reports_prior_existence() {
        let catalog = Catalog::new();
        assert!(!catalog.upsert("A (x)", json!(["x"])));
        assert!(catalog.upsert("A (x)", json!(["y"])));
        assert!(!catalog.upsert("B (x)", json!(["z"])));
    }

    #[test]
    fn lookup_returns_latest_value() {
        let catalog = Catalog::new();
        catalog.upsert("A (x)", json!("first"));
        catalog.upsert("A (x)", json!("second"));
        assert_eq!(catalog.lookup("A (x)"), Some(json!("second")));
    }

    #[test]
    fn lookup_miss_is_none_not_a_default() {
        let catalog = Catalog::new();
        assert_eq!(catalog.lookup("missing"), None);
    }

    #[test]
    fn null_is_a_storable_value() {
        let catalog = Catalog::new();
        catalog.upsert("N", Value::Null);
        assert_eq!(catalog.lookup("N"), Some(Value::Null));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn entries_hold_one_row_per_name() {
        let catalog = Catalog::new();
        catalog.upsert("A (x)", json!(1));
        catalog.upsert("B (y)", json!(2));
        catalog.upsert("A (x)", json!(3));

        let mut entries = catalog.entries();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            entries,
            vec![
                ("A (x)".to_string(), json!(3)),
                ("B (y)".to_string(), json!(2)),
            ]
        );
    }

    #[test]
    fn clear_resets_to_empty() {
        let catalog = Catalog::new();
        catalog.upsert("A (x)", json!(1));
        assert!(!catalog.is_empty());
        catalog.clear();
        assert!(catalog.is_empty());
    }
}
