//! Async request gateway for the navi backend.
//!
//! # Overview
//! Five operations, one per backend endpoint (user data, map info, traffic,
//! weather, road search). Each issues a GET against a configured base URL and
//! returns the JSON body untouched, or logs the failure and returns it.
//!
//! # Design
//! - `NaviClient` is stateless and I/O-free: it builds `HttpRequest` values
//!   and parses `HttpResponse` values.
//! - `Transport` is the only I/O seam; `HttpTransport` wraps `reqwest`.
//! - `Gateway` wires the two together and owns the log-and-return error
//!   policy. Configuration is passed in, never read from globals.
//! - Payloads are opaque `serde_json::Value`s; no schema is enforced.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod http;
pub mod transport;

pub use client::NaviClient;
pub use config::Config;
pub use endpoint::Endpoint;
pub use error::{ApiError, ConfigError};
pub use gateway::Gateway;
pub use http::{HttpRequest, HttpResponse};
pub use transport::{HttpTransport, Transport};
