//! Core domain model for Podium: an event catalog with a ticket ledger.
//!
//! This crate is the functional core of the system. It contains no I/O:
//!
//! - [`details`]: the `EventDetails` record and the composite
//!   `"<title> (<sport>)"` naming scheme
//! - [`codec`]: the positional wire representation of an event record
//! - [`catalog`]: the in-memory name-to-record store
//! - [`ledger`]: the rules governing ticket creation and reservation
//! - [`ranking`]: pure ranking and grouping views over event lists
//! - [`protocol`]: request/response types for the sync protocol
//!
//! The HTTP surface (`podium-web`) and the client (`podium-client`) are
//! thin shells over these modules.

pub mod catalog;
pub mod codec;
pub mod details;
pub mod ledger;
pub mod protocol;
pub mod ranking;

pub use catalog::Catalog;
pub use codec::{decode, encode, CodecError};
pub use details::{split_name, Event, EventDetails};
pub use ledger::{create, reserve, LedgerError};
