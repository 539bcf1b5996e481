//! Critical segment ranking.

use crate::RoadAssessment;

/// Assessments ranked worst-first, plus the number needing action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalSelection {
    /// Sorted by severity descending; equal severities keep catalog order.
    pub ordered:        Vec<RoadAssessment>,
    pub critical_count: usize,
}

impl CriticalSelection {
    /// The flagged roads, worst first.
    pub fn critical(&self) -> impl Iterator<Item = &RoadAssessment> + '_ {
        self.ordered.iter().filter(|a| a.needs_action)
    }
}

/// Rank `assessments` by severity, worst first.
///
/// The sort is stable, so ties keep their input (catalog) order.
pub fn select_critical(mut assessments: Vec<RoadAssessment>) -> CriticalSelection {
    assessments.sort_by(|a, b| b.severity.cmp(&a.severity));
    let critical_count = assessments.iter().filter(|a| a.needs_action).count();
    CriticalSelection { ordered: assessments, critical_count }
}
