//! The rerouting engine: traffic-share distribution, congestion feedback,
//! and load-balance scoring.

use aq_core::{AqResult, Severity, Station};
use aq_roads::{RoadRegistry, RoadSegment};
use aq_spatial::{Idw, Interpolator};

use crate::{Alternative, BlockedRoad, ReallocationResult, ReroutePlan, RerouteConfig, TrafficAction};

/// Computes reallocations against a caller-supplied catalog and station set.
///
/// # Type parameter
///
/// `I` must implement [`Interpolator`] (e.g. [`Idw`]).  Swap it at compile
/// time for a different estimator with no runtime overhead.
///
/// The engine holds only its configuration and estimator; every call is
/// independent, so one instance can serve concurrent requests.
pub struct RerouteEngine<I: Interpolator = Idw> {
    config:       RerouteConfig,
    interpolator: I,
}

impl<I: Interpolator> RerouteEngine<I> {
    /// Validate `config` and build an engine around `interpolator`.
    pub fn new(config: RerouteConfig, interpolator: I) -> AqResult<Self> {
        config.validate()?;
        Ok(Self { config, interpolator })
    }

    pub fn config(&self) -> &RerouteConfig {
        &self.config
    }

    /// Divert traffic away from `road_id` under `action`.
    ///
    /// An id missing from `roads` is replaced by the configured placeholder
    /// road and every catalog road becomes an alternative.  Fails only if
    /// `stations` is empty.
    pub fn reallocate(
        &self,
        road_id:  &str,
        action:   &TrafficAction,
        roads:    &RoadRegistry,
        stations: &[Station],
    ) -> AqResult<ReallocationResult> {
        let blocked = match roads.get(road_id) {
            Some(road) => BlockedRoad::Catalog(road.clone()),
            None => BlockedRoad::Placeholder(self.config.placeholder(road_id)),
        };
        let original_severity = self
            .interpolator
            .estimate(stations, blocked.segment().position)?;

        // ── Weighted distribution over every other road ───────────────────
        let mut alternatives = roads
            .iter()
            .filter(|road| road.id != road_id)
            .map(|road| self.weigh(road, stations))
            .collect::<AqResult<Vec<_>>>()?;

        let total_weight: f64 = alternatives.iter().map(|a| a.weight).sum();
        for alt in &mut alternatives {
            alt.traffic_share_pct = if total_weight > 0.0 {
                round_one_decimal(alt.weight / total_weight * 100.0)
            } else {
                0.0
            };
            let feedback = 1.0 + alt.traffic_share_pct / 100.0 * self.config.feedback_max;
            alt.projected_severity = (alt.severity as f64 * feedback).floor() as Severity;
        }

        // Stable: equal shares keep catalog order.
        alternatives.sort_by(|a, b| b.traffic_share_pct.total_cmp(&a.traffic_share_pct));

        let load_balance_score = load_balance_score(&alternatives);
        let plan = ReroutePlan::from_ranked(&alternatives);
        let rerouted_count = alternatives.len();
        alternatives.truncate(self.config.max_listed);

        // ── Effect on the restricted road ─────────────────────────────────
        let factor = action.reduction_factor();
        let projected_severity = (original_severity as f64 * (1.0 - factor)).floor() as Severity;

        Ok(ReallocationResult {
            blocked_road: blocked,
            action: action.clone(),
            original_severity,
            projected_severity,
            improvement_pct: (factor * 100.0).floor(),
            load_balance_score,
            alternatives,
            plan,
            rerouted_count,
        })
    }

    /// Severity, capacity, and raw weight for one alternative.  Share and
    /// projected severity are filled in once the weight sum is known.
    fn weigh(&self, road: &RoadSegment, stations: &[Station]) -> AqResult<Alternative> {
        let severity = self.interpolator.estimate(stations, road.position)?;
        let capacity = road.length_km * self.config.lane_factor;
        let divisor  = (severity.max(1) as f64).powf(self.config.alpha);
        Ok(Alternative {
            road: road.clone(),
            severity,
            capacity,
            weight: capacity / divisor,
            traffic_share_pct: 0.0,
            projected_severity: severity,
        })
    }
}

impl RerouteEngine<Idw> {
    /// Default policy with the default [`Idw`] estimator.
    pub fn with_defaults() -> Self {
        Self { config: RerouteConfig::default(), interpolator: Idw::default() }
    }
}

impl Default for RerouteEngine<Idw> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Reallocate with the default policy and [`Idw`] estimator.
pub fn reallocate(
    road_id:  &str,
    action:   &TrafficAction,
    roads:    &RoadRegistry,
    stations: &[Station],
) -> AqResult<ReallocationResult> {
    RerouteEngine::with_defaults().reallocate(road_id, action, roads, stations)
}

/// How evenly traffic is spread: 100 for a perfectly even split, falling by
/// 2 points per percentage point the largest share exceeds (or misses) the
/// ideal `100 / n`.  Rounded to the nearest integer; 0 with fewer than two
/// alternatives.
pub fn load_balance_score(alternatives: &[Alternative]) -> f64 {
    let n = alternatives.len();
    if n <= 1 {
        return 0.0;
    }
    let ideal_share = 100.0 / n as f64;
    let max_share = alternatives
        .iter()
        .map(|a| a.traffic_share_pct)
        .fold(f64::NEG_INFINITY, f64::max);
    (100.0 - (max_share - ideal_share).abs() * 2.0).max(0.0).round()
}

#[inline]
fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
