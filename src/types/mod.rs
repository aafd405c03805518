//! Request and response types for the SnapTrade REST API.
//!
//! This module contains the strongly-typed structs used for serializing
//! requests and deserializing responses across the endpoints this client
//! consumes.
//!
//! ## Organization
//!
//! - [`enums`] — Shared enumerations (actions, order types, time in force)
//! - [`accounts`] — Accounts, balances, and user registration types
//! - [`positions`] — Equity position and option holding types
//! - [`holdings`] — Combined account holdings payload
//! - [`activities`] — Account activity (transaction) types
//! - [`orders`] — Order records and order placement request/response types
//! - [`quotes`] — Per-instrument quote types
//! - [`connections`] — Brokerage authorization and connection portal types
//!
//! SnapTrade's wire format is `snake_case`, which matches Rust field naming,
//! so most structs carry no rename attributes; the user registration
//! endpoints speak camelCase and are the exception. Response payloads are sparse
//! in practice; nearly every field is `Option` with `#[serde(default)]`.
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod accounts;
pub mod activities;
pub mod connections;
pub mod enums;
pub mod holdings;
pub mod orders;
pub mod positions;
pub mod quotes;

pub use enums::*;
