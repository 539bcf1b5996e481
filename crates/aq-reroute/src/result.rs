//! Typed reallocation output records.

use aq_core::Severity;
use aq_roads::RoadSegment;

use crate::TrafficAction;

// ── BlockedRoad ───────────────────────────────────────────────────────────────

/// The road traffic is diverted away from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockedRoad {
    /// Found in the catalog.
    Catalog(RoadSegment),
    /// The requested id is not in the catalog; a stand-in built from
    /// [`RerouteConfig::placeholder`](crate::RerouteConfig::placeholder).
    Placeholder(RoadSegment),
}

impl BlockedRoad {
    pub fn segment(&self) -> &RoadSegment {
        match self {
            Self::Catalog(r) | Self::Placeholder(r) => r,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

// ── Alternative ───────────────────────────────────────────────────────────────

/// One candidate road for the diverted traffic.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    pub road:               RoadSegment,
    /// Current interpolated severity (unclamped).
    pub severity:           Severity,
    pub capacity:           f64,
    pub weight:             f64,
    /// Percentage of diverted traffic, rounded to one decimal.
    pub traffic_share_pct:  f64,
    /// Severity after absorbing its traffic share.
    pub projected_severity: Severity,
}

// ── ReroutePlan ───────────────────────────────────────────────────────────────

/// The top three alternatives by traffic share.  Slots are empty when fewer
/// alternatives exist.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReroutePlan {
    pub primary:   Option<Alternative>,
    pub secondary: Option<Alternative>,
    pub tertiary:  Option<Alternative>,
}

impl ReroutePlan {
    /// Fill slots from alternatives already sorted by share descending.
    pub fn from_ranked(ranked: &[Alternative]) -> Self {
        Self {
            primary:   ranked.first().cloned(),
            secondary: ranked.get(1).cloned(),
            tertiary:  ranked.get(2).cloned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }
}

// ── ReallocationResult ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReallocationResult {
    pub blocked_road:       BlockedRoad,
    pub action:             TrafficAction,
    /// Severity at the blocked road before the action.
    pub original_severity:  Severity,
    /// Severity at the blocked road after the action's reduction.
    pub projected_severity: Severity,
    pub improvement_pct:    f64,
    /// 0–100; 100 is a perfectly even split.
    pub load_balance_score: f64,
    /// Top alternatives by traffic share, at most `RerouteConfig::max_listed`.
    pub alternatives:       Vec<Alternative>,
    pub plan:               ReroutePlan,
    /// Size of the full alternative set the traffic was spread over.
    pub rerouted_count:     usize,
}

impl ReallocationResult {
    /// One-line human-readable description.
    pub fn summary(&self) -> String {
        format!(
            "Traffic blocked on {}. Distributed across {} routes.",
            self.blocked_road.segment().name,
            self.rerouted_count
        )
    }
}
