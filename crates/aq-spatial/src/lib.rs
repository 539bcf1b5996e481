//! `aq-spatial` — spatial estimation from sparse monitoring stations.
//!
//! # Crate layout
//!
//! | Module           | Contents                                               |
//! |------------------|--------------------------------------------------------|
//! | [`interpolator`] | `Interpolator` trait, `Idw`, free `estimate` function  |
//! | [`grid`]         | `GridBounds`, `GridSteps`, `GridPoint`, `HeatmapGrid`, `generate_grid` |
//! | [`loader`]       | `load_stations_csv`, `load_stations_reader`            |
//!
//! Everything here is a pure function of its inputs: no I/O outside the
//! loader, no shared state, no clock.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Generates heatmap grid points on Rayon's thread pool.     |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod grid;
pub mod interpolator;
pub mod loader;


pub use grid::{generate_grid, generate_grid_with, GridBounds, GridPoint, GridSteps, HeatmapGrid};
pub use interpolator::{estimate, Idw, Interpolator};
pub use loader::{load_stations_csv, load_stations_reader};
