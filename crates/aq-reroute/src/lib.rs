//! `aq-reroute` — adaptive traffic reallocation away from a restricted road.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`action`]  | `TrafficAction` and its severity-reduction factors        |
//! | [`config`]  | `RerouteConfig` policy constants                          |
//! | [`engine`]  | `RerouteEngine`, free `reallocate`, `load_balance_score`  |
//! | [`result`]  | `BlockedRoad`, `Alternative`, `ReroutePlan`, `ReallocationResult` |
//!
//! # Algorithm (summary)
//!
//! ```text
//! for each road r ≠ blocked:
//!   severity_r  = estimate(stations, r.position)
//!   capacity_r  = r.length_km · lane_factor
//!   weight_r    = capacity_r / max(severity_r, 1)^alpha
//! share_r       = round₁(weight_r / Σ weight · 100)
//! projected_r   = ⌊severity_r · (1 + share_r/100 · feedback_max)⌋
//! balance       = max(0, 100 − |max share − 100/n| · 2)       (0 when n ≤ 1)
//! ```
//!
//! The engine is total: an unknown road id, an empty alternative set, or a
//! zero weight sum all produce defined results.  Only an empty station set
//! fails.

pub mod action;
pub mod config;
pub mod engine;
pub mod result;


pub use action::TrafficAction;
pub use config::RerouteConfig;
pub use engine::{load_balance_score, reallocate, RerouteEngine};
pub use result::{Alternative, BlockedRoad, ReallocationResult, ReroutePlan};
