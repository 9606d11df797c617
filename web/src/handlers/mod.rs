//! HTTP handlers for the sync protocol and health checks.

pub mod catalog;
pub mod health;
