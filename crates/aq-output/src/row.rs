//! Plain data row types written by output backends.

use aq_reroute::ReallocationResult;
use aq_roads::RoadAssessment;
use aq_spatial::GridPoint;

/// One road's mapped severity.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentRow {
    pub road_id:      String,
    pub name:         String,
    pub lat:          f64,
    pub lon:          f64,
    pub severity:     u32,
    pub congestion:   &'static str,
    pub needs_action: bool,
}

impl From<&RoadAssessment> for AssessmentRow {
    fn from(a: &RoadAssessment) -> Self {
        Self {
            road_id:      a.road.id.clone(),
            name:         a.road.name.clone(),
            lat:          a.road.position.lat,
            lon:          a.road.position.lon,
            severity:     a.severity,
            congestion:   a.congestion.as_str(),
            needs_action: a.needs_action,
        }
    }
}

/// One listed alternative of a reallocation.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionRow {
    pub blocked_road_id:    String,
    pub action:             String,
    /// 1-based position by traffic share.
    pub rank:               usize,
    pub road_id:            String,
    pub name:               String,
    pub via:                String,
    pub length_km:          f64,
    pub traffic_share_pct:  f64,
    pub severity:           u32,
    pub projected_severity: u32,
}

impl DistributionRow {
    /// Flatten the listed alternatives of `result`, best share first.
    pub fn from_result(result: &ReallocationResult) -> Vec<Self> {
        let blocked = &result.blocked_road.segment().id;
        result
            .alternatives
            .iter()
            .enumerate()
            .map(|(i, a)| Self {
                blocked_road_id:    blocked.clone(),
                action:             result.action.to_string(),
                rank:               i + 1,
                road_id:            a.road.id.clone(),
                name:               a.road.name.clone(),
                via:                a.road.via.clone(),
                length_km:          a.road.length_km,
                traffic_share_pct:  a.traffic_share_pct,
                severity:           a.severity,
                projected_severity: a.projected_severity,
            })
            .collect()
    }
}

/// One heatmap lattice point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRow {
    pub row:      u32,
    pub col:      u32,
    pub lat:      f64,
    pub lon:      f64,
    pub severity: u32,
    pub label:    &'static str,
}

impl From<&GridPoint> for GridRow {
    fn from(p: &GridPoint) -> Self {
        Self {
            row:      p.row,
            col:      p.col,
            lat:      p.position.lat,
            lon:      p.position.lon,
            severity: p.severity,
            label:    p.label.as_str(),
        }
    }
}
