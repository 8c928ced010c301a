//! Module for emergency controls.
//!
//! Bulk operations that the dashboard keeps behind a confirmation: stopping
//! every agent session and restarting the gateway.

pub mod handlers;
pub mod routes;
