//! Interpolation trait and default inverse-distance-weighted implementation.
//!
//! # Pluggability
//!
//! The road mapper, rerouting engine, and grid generator all call the
//! estimator through the [`Interpolator`] trait, so applications can swap in
//! kriging or a nearest-station lookup without touching those components.
//! The default [`Idw`] reproduces the station-weighted average used across
//! the whole engine.

use aq_core::{AqError, AqResult, GeoPoint, Severity, Station};

// ── Interpolator trait ────────────────────────────────────────────────────────

/// Pluggable point estimator over a station set.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one instance can be shared
/// across Rayon workers during parallel grid generation.
pub trait Interpolator: Send + Sync {
    /// Estimate the severity at `at` from `stations`.
    ///
    /// Returns [`AqError::InvalidInput`] if `stations` is empty.
    fn estimate(&self, stations: &[Station], at: GeoPoint) -> AqResult<Severity>;
}

// ── Idw ───────────────────────────────────────────────────────────────────────

/// Inverse distance weighting: `w_i = 1 / d_i^power`, result
/// `Σ(w_i · v_i) / Σ(w_i)` truncated to an integer index.
///
/// Distance is Euclidean in raw degree space.  A station lying on the query
/// point (or close enough that its weight overflows) dominates every other
/// weight, so its own value is returned unchanged (the mean of their values
/// when several stations coincide).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Idw {
    pub power: f64,
}

impl Idw {
    pub const DEFAULT_POWER: f64 = 2.0;

    pub fn new(power: f64) -> Self {
        Self { power }
    }
}

impl Default for Idw {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POWER)
    }
}

impl Interpolator for Idw {
    fn estimate(&self, stations: &[Station], at: GeoPoint) -> AqResult<Severity> {
        if stations.is_empty() {
            return Err(AqError::InvalidInput(
                "spatial estimate requires at least one station".into(),
            ));
        }

        let mut numerator   = 0.0;
        let mut denominator = 0.0;
        let mut coincident_sum   = 0.0;
        let mut coincident_count = 0usize;

        for s in stations {
            let d = at.degree_distance(s.position);
            let w = 1.0 / d.powf(self.power);
            // d == 0, or d so small that 1/d^power overflows.
            if !w.is_finite() {
                coincident_sum += s.value;
                coincident_count += 1;
                continue;
            }
            numerator += w * s.value;
            denominator += w;
        }

        if coincident_count > 0 {
            return Ok(truncate(coincident_sum / coincident_count as f64));
        }
        if denominator == 0.0 {
            return Ok(0);
        }
        Ok(truncate(numerator / denominator))
    }
}

/// Truncate toward zero.  The `as` cast saturates and maps NaN to 0.
#[inline]
fn truncate(v: f64) -> Severity {
    v as Severity
}

/// Estimate with the default [`Idw`] (power 2).
pub fn estimate(stations: &[Station], at: GeoPoint) -> AqResult<Severity> {
    Idw::default().estimate(stations, at)
}
