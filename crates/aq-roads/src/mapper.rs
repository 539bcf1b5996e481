//! Road severity mapping.
//!
//! Each road's severity is the interpolated station severity at the road's
//! reference coordinate.  The output has one assessment per input road, in
//! input order; no road is ever dropped.

use aq_core::{AqResult, CongestionLabel, Severity, Station};
use aq_spatial::{Idw, Interpolator};

use crate::RoadSegment;

/// Roads above this severity are flagged for intervention.
pub const ACTION_THRESHOLD: Severity = 300;

/// Per-road severity snapshot.  Produced fresh on every call; not cached.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadAssessment {
    pub road:         RoadSegment,
    pub severity:     Severity,
    pub congestion:   CongestionLabel,
    /// `severity > ACTION_THRESHOLD`.
    pub needs_action: bool,
}

impl RoadAssessment {
    pub fn new(road: RoadSegment, severity: Severity) -> Self {
        Self {
            road,
            severity,
            congestion:   CongestionLabel::from_severity(severity),
            needs_action: severity > ACTION_THRESHOLD,
        }
    }
}

/// Map every road with the default [`Idw`] estimator.
pub fn map_roads(roads: &[RoadSegment], stations: &[Station]) -> AqResult<Vec<RoadAssessment>> {
    map_roads_with(&Idw::default(), roads, stations)
}

/// Map every road using any [`Interpolator`].
///
/// Fails only if `stations` is empty.
pub fn map_roads_with<I: Interpolator + ?Sized>(
    interpolator: &I,
    roads:        &[RoadSegment],
    stations:     &[Station],
) -> AqResult<Vec<RoadAssessment>> {
    roads
        .iter()
        .map(|road| {
            let severity = interpolator.estimate(stations, road.position)?;
            Ok(RoadAssessment::new(road.clone(), severity))
        })
        .collect()
}
