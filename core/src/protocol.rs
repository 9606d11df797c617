//! Request/response types for the sync protocol.
//!
//! Three operations make up the whole contract: a write (`/update`), a
//! single-record read (`/fetch`), and a full listing (`/names`). The one
//! write path serves both "create event" and "record purchase": the
//! distinction lives entirely in what the client computed through the
//! ledger before submitting; the server stores what it is given and never
//! synthesizes data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /update`: store `content` under `name`.
///
/// `content` is any JSON value, including `null`. (A request with the
/// `content` key *absent* is rejected at the boundary before this type is
/// ever built; the server distinguishes absent from `null`.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Composite event name to store under.
    pub name: String,
    /// Encoded event record, or any JSON value at all (the store is
    /// schema-agnostic).
    pub content: Value,
}

/// Response to `POST /update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// True iff a record with that name existed before this write, i.e.
    /// the write was an overwrite rather than a first insert.
    pub saved: bool,
}

/// Response to `GET /fetch?name=...`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResponse {
    /// The name that was looked up.
    pub name: String,
    /// The stored value, exactly as written.
    pub content: Value,
}

/// Response to `GET /names`: the full catalog as parallel arrays.
///
/// `names[i]` pairs with `events[i]`; order is unspecified and unsorted.
/// Display ordering is the client's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// All composite event names.
    pub names: Vec<String>,
    /// The stored record for each name, same order.
    pub events: Vec<Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_request_accepts_null_content() {
        let req: UpdateRequest =
            serde_json::from_value(json!({"name": "A (x)", "content": null})).unwrap();
        assert_eq!(req.content, Value::Null);
    }

    #[test]
    fn list_response_shape() {
        let body = serde_json::to_value(ListResponse {
            names: vec!["A (x)".to_string()],
            events: vec![json!(["x", "A", "1", "0", "5", "", ""])],
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"names": ["A (x)"], "events": [["x", "A", "1", "0", "5", "", ""]]})
        );
    }
}
