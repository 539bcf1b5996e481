//! Regular-lattice heatmap generation.
//!
//! # Lattice
//!
//! `(n_lat + 1) × (n_lng + 1)` points, inclusive of both bounds, generated in
//! row-major order (latitude outer, longitude inner):
//!
//! ```text
//! lat_i = lat_min + i · (lat_max − lat_min) / n_lat     i ∈ 0..=n_lat
//! lng_j = lng_min + j · (lng_max − lng_min) / n_lng     j ∈ 0..=n_lng
//! ```
//!
//! Every point is estimated independently, so the `parallel` feature can fan
//! the work out without affecting the result or its order.

use aq_core::{AqError, AqResult, GeoPoint, GridSeverity, Severity, Station};

use crate::interpolator::{Idw, Interpolator};

/// Axis-aligned bounding box in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

/// Number of intervals along each axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSteps {
    pub n_lat: u32,
    pub n_lng: u32,
}

impl GridSteps {
    /// Total number of lattice points.
    pub fn point_count(self) -> usize {
        (self.n_lat as usize + 1) * (self.n_lng as usize + 1)
    }
}

/// One estimated lattice point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// Latitude index, `0..=n_lat`.
    pub row:      u32,
    /// Longitude index, `0..=n_lng`.
    pub col:      u32,
    pub position: GeoPoint,
    pub severity: Severity,
    pub label:    GridSeverity,
}

impl GridPoint {
    pub fn sector_name(&self) -> String {
        format!("Sector {}-{}", self.row, self.col)
    }
}

/// A generated heatmap plus the lattice parameters that produced it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapGrid {
    /// Row-major lattice points.
    pub points:        Vec<GridPoint>,
    pub lat_step:      f64,
    pub lng_step:      f64,
    pub station_count: usize,
}

/// Generate a heatmap with the default [`Idw`] estimator.
pub fn generate_grid(
    stations: &[Station],
    bounds:   GridBounds,
    steps:    GridSteps,
) -> AqResult<HeatmapGrid> {
    generate_grid_with(&Idw::default(), stations, bounds, steps)
}

/// Generate a heatmap using any [`Interpolator`].
///
/// Fails with [`AqError::InvalidInput`] for an empty station set, a zero step
/// count, or a non-finite or inverted bounding box.
pub fn generate_grid_with<I: Interpolator + ?Sized>(
    interpolator: &I,
    stations:     &[Station],
    bounds:       GridBounds,
    steps:        GridSteps,
) -> AqResult<HeatmapGrid> {
    validate(stations, bounds, steps)?;

    let lat_step = (bounds.lat_max - bounds.lat_min) / steps.n_lat as f64;
    let lng_step = (bounds.lng_max - bounds.lng_min) / steps.n_lng as f64;
    let cols = steps.n_lng + 1;

    let point_at = |k: usize| -> AqResult<GridPoint> {
        let row = k as u32 / cols;
        let col = k as u32 % cols;
        let position = GeoPoint::new(
            bounds.lat_min + row as f64 * lat_step,
            bounds.lng_min + col as f64 * lng_step,
        );
        let severity = interpolator.estimate(stations, position)?;
        Ok(GridPoint {
            row,
            col,
            position,
            severity,
            label: GridSeverity::from_severity(severity),
        })
    };

    #[cfg(not(feature = "parallel"))]
    let points = (0..steps.point_count())
        .map(point_at)
        .collect::<AqResult<Vec<_>>>()?;

    #[cfg(feature = "parallel")]
    let points = {
        use rayon::prelude::*;

        // Indexed parallel iterators collect in index order.
        (0..steps.point_count())
            .into_par_iter()
            .map(point_at)
            .collect::<AqResult<Vec<_>>>()?
    };

    Ok(HeatmapGrid {
        points,
        lat_step,
        lng_step,
        station_count: stations.len(),
    })
}

fn validate(stations: &[Station], bounds: GridBounds, steps: GridSteps) -> AqResult<()> {
    if stations.is_empty() {
        return Err(AqError::InvalidInput("heatmap requires at least one station".into()));
    }
    if steps.n_lat == 0 || steps.n_lng == 0 {
        return Err(AqError::InvalidInput(format!(
            "grid steps must be positive, got {}×{}",
            steps.n_lat, steps.n_lng
        )));
    }
    let finite = [bounds.lat_min, bounds.lat_max, bounds.lng_min, bounds.lng_max]
        .iter()
        .all(|v| v.is_finite());
    if !finite || bounds.lat_min > bounds.lat_max || bounds.lng_min > bounds.lng_max {
        return Err(AqError::InvalidInput(format!("invalid grid bounds {bounds:?}")));
    }
    Ok(())
}
