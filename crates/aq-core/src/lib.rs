//! `aq-core` — foundational types for the `aq_reroute` air-quality engine.
//!
//! This crate is a dependency of every other `aq-*` crate.  It intentionally
//! has no `aq-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, planar degree distance                    |
//! | [`station`]     | `Station` (monitoring reading at a fixed point)       |
//! | [`severity`]    | `Severity`, `CongestionLabel`, `GridSeverity`, `RiskCategory` |
//! | [`error`]       | `AqError`, `AqResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod severity;
pub mod station;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AqError, AqResult};
pub use geo::GeoPoint;
pub use severity::{CongestionLabel, GridSeverity, RiskCategory, Severity};
pub use station::Station;
