//! polyglot-services - three standalone example HTTP services
//!
//! Each binary binds its own port and serves one route:
//! - `user-service`: `GET /users/:id` from a fixed user list, JSON
//! - `employee-service`: `GET /employee`, a fixed JSON record
//! - `payroll-service`: `GET /payroll`, a fixed record rendered as XML
//!
//! The services never talk to each other; the point is the wire format.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;
pub mod types;
pub mod xml;

pub use error::{Error, Result};
