//! Rerouting policy constants.

use aq_core::{AqError, AqResult, GeoPoint};
use aq_roads::RoadSegment;

/// Tunable constants for [`RerouteEngine`](crate::RerouteEngine).
///
/// Typically left at `Default`; applications may load an override from
/// their own configuration file and pass it to `RerouteEngine::new`, which
/// validates it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RerouteConfig {
    /// Severity sensitivity.  Higher values penalise polluted alternatives
    /// more sharply relative to their capacity.  Default: 1.5.
    pub alpha: f64,

    /// Lane normalisation: `capacity = length_km · lane_factor`.  Default: 3.
    pub lane_factor: f64,

    /// Severity increase on an alternative carrying 100 % of the diverted
    /// traffic.  Default: 0.05.
    pub feedback_max: f64,

    /// Number of alternatives listed in a result.  The weight sum and balance
    /// score always use the full set.  Default: 5.
    pub max_listed: usize,

    /// Where an unknown road id is assumed to be.  Default: central Delhi.
    pub placeholder_position: GeoPoint,

    /// Length assumed for an unknown road id.  Default: 5 km.
    pub placeholder_length_km: f64,
}

impl Default for RerouteConfig {
    fn default() -> Self {
        Self {
            alpha:                 1.5,
            lane_factor:           3.0,
            feedback_max:          0.05,
            max_listed:            5,
            placeholder_position:  GeoPoint::new(28.6139, 77.2090),
            placeholder_length_km: 5.0,
        }
    }
}

impl RerouteConfig {
    /// Reject non-finite or out-of-range constants.
    pub fn validate(&self) -> AqResult<()> {
        let bad = |what: &str, v: f64| {
            Err(AqError::InvalidConfig(format!("reroute {what} must be valid, got {v}")))
        };
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return bad("alpha", self.alpha);
        }
        if !(self.lane_factor.is_finite() && self.lane_factor > 0.0) {
            return bad("lane_factor", self.lane_factor);
        }
        if !(self.feedback_max.is_finite() && self.feedback_max >= 0.0) {
            return bad("feedback_max", self.feedback_max);
        }
        if !(self.placeholder_length_km.is_finite() && self.placeholder_length_km > 0.0) {
            return bad("placeholder_length_km", self.placeholder_length_km);
        }
        let p = self.placeholder_position;
        if !(p.lat.is_finite() && p.lon.is_finite()) {
            return Err(AqError::InvalidConfig(format!(
                "reroute placeholder_position must be finite, got {p}"
            )));
        }
        Ok(())
    }

    /// Stand-in road for an id missing from the catalog.
    pub fn placeholder(&self, road_id: &str) -> RoadSegment {
        RoadSegment::new(
            road_id,
            format!("Zone {road_id}"),
            self.placeholder_position,
            self.placeholder_length_km,
            "",
        )
    }
}
