//! The three sync-protocol endpoints.
//!
//! - `POST /update`: upsert a record, reporting whether the name existed
//! - `GET /fetch?name=...`: one stored record, or 404
//! - `GET /names`: the whole catalog as parallel arrays
//!
//! The update body is validated by hand on a raw JSON value rather than
//! deserialized into a struct: the contract distinguishes a `content` key
//! that is *absent* (rejected) from one that is `null` (a perfectly valid
//! value, stored as-is), and serde cannot see that difference once the
//! body is a typed struct.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use podium_core::protocol::{FetchResponse, ListResponse, UpdateResponse};
use serde::Deserialize;
use serde_json::Value;

/// Store an encoded event record under a composite name.
///
/// Serves both "create event" and "record purchase": the client computed
/// whichever transition applies through the ledger and submits the whole
/// record; the server does not distinguish the two.
///
/// Responds `200 {"saved": bool}`, true iff the name pre-existed.
///
/// # Errors
///
/// `400` with a plain-text message if `name` is missing or not a string,
/// or if the `content` key is absent.
pub async fn update_event(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<UpdateResponse>, AppError> {
    let Some(name) = body.get("name").and_then(Value::as_str) else {
        return Err(AppError::bad_request("missing \"name\" parameter"));
    };
    // Absent key and null value are different things here.
    let Some(content) = body.get("content") else {
        return Err(AppError::bad_request("missing \"content\" parameter"));
    };

    let existed = state.catalog.upsert(name, content.clone());
    tracing::info!(name, existed, "stored event record");
    Ok(Json(UpdateResponse { saved: existed }))
}

/// Query parameters for `GET /fetch`.
#[derive(Debug, Deserialize)]
pub struct FetchParams {
    /// Composite event name to look up.
    pub name: Option<String>,
}

/// Retrieve the stored record for one name.
///
/// The server returns exactly what was stored; it never synthesizes a
/// default record for a miss.
///
/// # Errors
///
/// `400` if `name` is missing; `404` if no record exists under that name.
pub async fn fetch_event(
    State(state): State<AppState>,
    Query(params): Query<FetchParams>,
) -> Result<Json<FetchResponse>, AppError> {
    let Some(name) = params.name else {
        return Err(AppError::bad_request("missing \"name\" parameter"));
    };
    match state.catalog.lookup(&name) {
        Some(content) => Ok(Json(FetchResponse { name, content })),
        None => {
            tracing::debug!(%name, "fetch miss");
            Err(AppError::not_found("there was no event of this name"))
        }
    }
}

/// List every stored name and record as parallel arrays.
///
/// No filtering, no pagination, no sorting. Ordering for display is the
/// client's responsibility.
pub async fn list_events(State(state): State<AppState>) -> Json<ListResponse> {
    let (names, events) = state.catalog.entries().into_iter().unzip();
    Json(ListResponse { names, events })
}
