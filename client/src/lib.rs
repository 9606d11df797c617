//! HTTP client for the Podium sync protocol.
//!
//! The client owns the business rules: it computes event creation and
//! ticket reservation locally through `podium_core::ledger`, then submits
//! the resulting whole record to the server for storage (optimistic
//! client-side mutation, server reconciliation). The server applies
//! last-write-wins; see `podium_core::catalog` for the race this accepts.

use podium_core::details::Event;
use podium_core::protocol::{FetchResponse, ListResponse, UpdateRequest, UpdateResponse};
use podium_core::{codec, ledger, ranking, CodecError, LedgerError};
use serde_json::Value;
use thiserror::Error;

/// How many events the popularity ranking shows.
pub const RANKING_SIZE: usize = 3;

/// Failures on the client side of the protocol.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request with a client-error status.
    #[error("server rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// The server's plain-text message.
        message: String,
    },

    /// Fetch miss: no record under that name.
    #[error("no event named {0:?}")]
    NotFound(String),

    /// An event with this composite name is already in the catalog.
    #[error("an event named {0:?} already exists")]
    DuplicateName(String),

    /// A stored record failed to decode.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A ledger precondition failed before anything was sent.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// `/names` returned arrays of different lengths.
    #[error("misaligned listing: {names} names but {events} records")]
    MisalignedListing {
        /// Length of the names array.
        names: usize,
        /// Length of the events array.
        events: usize,
    },
}

/// Client for one catalog server.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Point a client at a server base URL (e.g. `http://localhost:8088`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Register a brand-new event.
    ///
    /// Runs `ledger::create` locally, encodes the record, and submits it.
    /// The composite name must not already be taken: this is the one place
    /// the client refuses an overwrite, because silently replacing an
    /// event's ticket state would forge capacity.
    ///
    /// # Errors
    ///
    /// Ledger precondition failures ([`ClientError::Ledger`]),
    /// [`ClientError::DuplicateName`] if the name pre-existed (the record
    /// has been stored by then, last write wins, so callers should pick
    /// a new title), or transport/server errors.
    pub async fn create_event(
        &self,
        sport: &str,
        title: &str,
        capacity: u128,
        date: u128,
        description: &str,
        venue: &str,
    ) -> Result<Event, ClientError> {
        let details = ledger::create(sport, title, capacity, date, description, venue)?;
        let name = details.composite_name();
        let existed = self.submit(&name, codec::encode(&details)).await?;
        if existed {
            tracing::warn!(%name, "create overwrote an existing event");
            return Err(ClientError::DuplicateName(name));
        }
        Ok(Event::new(name, details))
    }

    /// Reserve tickets against the client's copy of an event.
    ///
    /// Runs `ledger::reserve` on the local record and submits the result;
    /// the server stores it without re-checking the arithmetic. Returns
    /// the updated event for the caller's local state.
    ///
    /// # Errors
    ///
    /// [`ClientError::Ledger`] if the quantity is invalid or exceeds the
    /// tickets left on the local copy, or transport/server errors.
    pub async fn reserve(&self, event: &Event, count: u128) -> Result<Event, ClientError> {
        let updated = ledger::reserve(&event.details, count)?;
        self.submit(&event.name, codec::encode(&updated)).await?;
        tracing::info!(name = %event.name, count = %count, "reserved tickets");
        Ok(Event::new(event.name.clone(), updated))
    }

    /// Fetch one event by composite name.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotFound`] on a miss, [`ClientError::Codec`] if the
    /// stored record does not decode, or transport/server errors.
    pub async fn fetch(&self, name: &str) -> Result<Event, ClientError> {
        let response = self
            .http
            .get(format!("{}/fetch", self.base_url))
            .query(&[("name", name)])
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(name.to_string()));
        }
        let body: FetchResponse = check(response).await?.json().await?;
        let details = codec::decode(&body.content)?;
        Ok(Event::new(body.name, details))
    }

    /// Refresh the full event list from the server.
    ///
    /// Decodes every stored record and pairs it with its name. Records
    /// that fail to decode are skipped with a warning rather than failing
    /// the whole refresh: one corrupt record must not blank the page.
    ///
    /// # Errors
    ///
    /// Transport/server errors, or [`ClientError::MisalignedListing`] if
    /// the parallel arrays disagree in length.
    pub async fn refresh(&self) -> Result<Vec<Event>, ClientError> {
        let response = self.http.get(format!("{}/names", self.base_url)).send().await?;
        let body: ListResponse = check(response).await?.json().await?;
        if body.names.len() != body.events.len() {
            return Err(ClientError::MisalignedListing {
                names: body.names.len(),
                events: body.events.len(),
            });
        }

        let mut events = Vec::with_capacity(body.names.len());
        for (name, record) in body.names.into_iter().zip(body.events) {
            match codec::decode(&record) {
                Ok(details) => events.push(Event::new(name, details)),
                Err(err) => tracing::warn!(%name, %err, "skipping undecodable record"),
            }
        }
        Ok(events)
    }

    /// POST one record to `/update`; returns whether the name pre-existed.
    async fn submit(&self, name: &str, content: Value) -> Result<bool, ClientError> {
        let request = UpdateRequest {
            name: name.to_string(),
            content,
        };
        let response = self
            .http
            .post(format!("{}/update", self.base_url))
            .json(&request)
            .send()
            .await?;
        let body: UpdateResponse = check(response).await?.json().await?;
        Ok(body.saved)
    }
}

/// Map client-error statuses to [`ClientError::Rejected`] with the
/// server's plain-text message.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let message = response.text().await.unwrap_or_default();
        return Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

/// The two independently ordered views the UI shows after a refresh.
#[derive(Debug, Clone)]
pub struct EventListing {
    /// All events, ascending by date.
    pub upcoming: Vec<Event>,
    /// Most-popular events, descending by tickets sold.
    pub ranking: Vec<Event>,
}

impl EventListing {
    /// Assemble both views from one refreshed event list.
    ///
    /// The views are independent copies: ranking never disturbs the
    /// chronological listing and vice versa.
    #[must_use]
    pub fn build(events: &[Event]) -> Self {
        Self {
            upcoming: ranking::by_date(events),
            ranking: ranking::top_n(events, RANKING_SIZE),
        }
    }

    /// Distinct sports across the listing, first-seen order.
    #[must_use]
    pub fn sports(&self) -> Vec<String> {
        let names: Vec<&str> = self.upcoming.iter().map(|e| e.name.as_str()).collect();
        ranking::distinct_sports(&names)
    }

    /// Distinct event titles for one sport.
    #[must_use]
    pub fn events_for_sport(&self, sport: &str) -> Vec<String> {
        let names: Vec<&str> = self.upcoming.iter().map(|e| e.name.as_str()).collect();
        ranking::events_for_sport(sport, &names)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use podium_core::details::EventDetails;

    fn event(name: &str, sold: u128, date: u128) -> Event {
        let (title, sport) = podium_core::split_name(name);
        Event::new(
            name.to_string(),
            EventDetails {
                sport: sport.to_string(),
                title: title.to_string(),
                tickets_left: 50,
                tickets_sold: sold,
                date,
                description: String::new(),
                venue: String::new(),
            },
        )
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = CatalogClient::new("http://localhost:8088/");
        assert_eq!(client.base_url, "http://localhost:8088");
    }

    #[test]
    fn listing_orders_views_independently() {
        let events = vec![
            event("A (x)", 1, 20),
            event("B (y)", 9, 5),
            event("C (x)", 4, 11),
            event("D (z)", 9, 2),
        ];
        let listing = EventListing::build(&events);

        let upcoming: Vec<&str> = listing.upcoming.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(upcoming, ["D (z)", "B (y)", "C (x)", "A (x)"]);

        // Top three, ties in input order.
        let ranking: Vec<&str> = listing.ranking.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(ranking, ["B (y)", "D (z)", "C (x)"]);
    }

    #[test]
    fn listing_grouping_views() {
        let listing = EventListing::build(&[
            event("A (x)", 0, 1),
            event("B (y)", 0, 2),
            event("C (x)", 0, 3),
        ]);
        assert_eq!(listing.sports(), ["x", "y"]);
        assert_eq!(listing.events_for_sport("x"), ["A", "C"]);
    }
}
