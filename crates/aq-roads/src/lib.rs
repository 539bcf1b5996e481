//! `aq-roads` — the road catalog and everything computed per road.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`segment`]   | `RoadSegment`                                              |
//! | [`registry`]  | `RoadRegistry`, `RoadRegistryBuilder`, `SharedRoadRegistry` |
//! | [`loader`]    | `load_roads_csv`, `load_roads_reader`                      |
//! | [`mapper`]    | `RoadAssessment`, `map_roads`, `map_roads_with`            |
//! | [`critical`]  | `CriticalSelection`, `select_critical`                     |
//! | [`error`]     | `RoadError`, `RoadResult<T>`                               |
//!
//! # Data flow
//!
//! ```text
//! RoadRegistry ─┐
//!               ├─► map_roads ─► Vec<RoadAssessment> ─► select_critical
//! &[Station] ───┘
//! ```
//!
//! The catalog is validated once at construction.  Mapping and ranking never
//! fail for a valid catalog and a non-empty station set.

pub mod critical;
pub mod error;
pub mod loader;
pub mod mapper;
pub mod registry;
pub mod segment;


pub use critical::{select_critical, CriticalSelection};
pub use error::{RoadError, RoadResult};
pub use loader::{load_roads_csv, load_roads_reader};
pub use mapper::{map_roads, map_roads_with, RoadAssessment, ACTION_THRESHOLD};
pub use registry::{RoadRegistry, RoadRegistryBuilder, SharedRoadRegistry};
pub use segment::RoadSegment;
