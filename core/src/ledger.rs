//! The ticket ledger: rules for how ticket counts may change.
//!
//! Both operations are pure transformations on [`EventDetails`] values.
//! The ledger never talks to the catalog; callers persist the result via
//! [`crate::Catalog::upsert`]. Preconditions are checked before anything
//! else, so a failed call leaves every input untouched.

use crate::details::EventDetails;
use thiserror::Error;

/// Precondition violations on ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Reservation quantity was zero (counts are unsigned, so negative
    /// quantities cannot be represented at all).
    #[error("ticket quantity must be positive")]
    InvalidQuantity,

    /// More tickets requested than remain.
    #[error("only {available} tickets left, cannot reserve {requested}")]
    InsufficientInventory {
        /// Tickets the caller asked for.
        requested: u128,
        /// Tickets actually remaining.
        available: u128,
    },

    /// New events must start with at least one ticket.
    #[error("event capacity must be positive")]
    InvalidCapacity,

    /// The date must be a day of month.
    #[error("event date must be between 1 and 31, got {0}")]
    InvalidDate(u128),

    /// The purchase would push `tickets_sold` past the representable
    /// range. Only reachable on records whose counters were written by a
    /// foreign client: the store accepts any decodable record, so the
    /// ledger re-checks before doing arithmetic.
    #[error("ticket counters out of range")]
    CounterOverflow,
}

/// Create the initial details for a new event.
///
/// Capacity is fixed here for the lifetime of the event: every ticket
/// starts in `tickets_left` and reservations only ever move tickets to
/// `tickets_sold`.
///
/// # Errors
///
/// [`LedgerError::InvalidCapacity`] if `capacity` is zero;
/// [`LedgerError::InvalidDate`] if `date` is not in `1..=31`.
pub fn create(
    sport: impl Into<String>,
    title: impl Into<String>,
    capacity: u128,
    date: u128,
    description: impl Into<String>,
    venue: impl Into<String>,
) -> Result<EventDetails, LedgerError> {
    if capacity == 0 {
        return Err(LedgerError::InvalidCapacity);
    }
    if !(1..=31).contains(&date) {
        return Err(LedgerError::InvalidDate(date));
    }
    Ok(EventDetails {
        sport: sport.into(),
        title: title.into(),
        tickets_left: capacity,
        tickets_sold: 0,
        date,
        description: description.into(),
        venue: venue.into(),
    })
}

/// Reserve `count` tickets, producing the post-purchase details.
///
/// Moves `count` units from `tickets_left` to `tickets_sold`; every other
/// field is carried over unchanged. The input is not mutated.
///
/// # Errors
///
/// [`LedgerError::InvalidQuantity`] if `count` is zero;
/// [`LedgerError::InsufficientInventory`] if `count` exceeds
/// `tickets_left`; [`LedgerError::CounterOverflow`] if the resulting
/// `tickets_sold` would not be representable.
pub fn reserve(details: &EventDetails, count: u128) -> Result<EventDetails, LedgerError> {
    if count == 0 {
        return Err(LedgerError::InvalidQuantity);
    }
    if count > details.tickets_left {
        return Err(LedgerError::InsufficientInventory {
            requested: count,
            available: details.tickets_left,
        });
    }
    let tickets_sold = details
        .tickets_sold
        .checked_add(count)
        .ok_or(LedgerError::CounterOverflow)?;
    let mut updated = details.clone();
    updated.tickets_left -= count;
    updated.tickets_sold = tickets_sold;
    Ok(updated)
}
