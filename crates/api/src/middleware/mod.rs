//! Request middleware.
//!
//! - [`access_log::access_log`] -- One INFO line per request with the client IP,
//!   method, path, status and latency.
//! - [`cors::route_preflight`] -- Lets non-preflight `OPTIONS` requests bypass
//!   the CORS short-circuit.

pub mod access_log;
pub mod cors;
