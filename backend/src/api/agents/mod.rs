//! Module for the agent session API.
//!
//! This module defines the endpoints that list agent sessions and act on a
//! single session: messaging it, stopping it, switching its model, and
//! spawning new ones.

pub mod handlers;
pub mod routes;
