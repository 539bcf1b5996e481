//! The shared severity scale and its discrete labels.
//!
//! Stations, roads, and grid points all report on the same scale, so values
//! compare directly.  Each label family has its own cut set:
//!
//! | Label              | Used for        | Cuts (inclusive upper bounds)         |
//! |--------------------|-----------------|---------------------------------------|
//! | [`CongestionLabel`]| road segments   | 250 Normal, 300 Moderate, 350 Heavy   |
//! | [`GridSeverity`]   | heatmap points  | 100 Good, 300 Medium, 400 High        |
//! | [`RiskCategory`]   | station readings| 50, 100, 200, 300, 400                |

use std::fmt;

/// Integer severity index.  Interpolated values are truncated toward zero.
pub type Severity = u32;

/// Traffic-congestion label derived from a road's mapped severity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CongestionLabel {
    Normal,
    Moderate,
    Heavy,
    Severe,
}

impl CongestionLabel {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            s if s > 350 => Self::Severe,
            s if s > 300 => Self::Heavy,
            s if s > 250 => Self::Moderate,
            _ => Self::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal   => "Normal",
            Self::Moderate => "Moderate",
            Self::Heavy    => "Heavy",
            Self::Severe   => "Severe",
        }
    }
}

impl fmt::Display for CongestionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heatmap label for one grid point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridSeverity {
    Good,
    Medium,
    High,
    Critical,
}

impl GridSeverity {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            0..=100   => Self::Good,
            101..=300 => Self::Medium,
            301..=400 => Self::High,
            _         => Self::Critical,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good     => "good",
            Self::Medium   => "medium",
            Self::High     => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for GridSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health-risk band for a station reading.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskCategory {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
}

impl RiskCategory {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            0..=50    => Self::Good,
            51..=100  => Self::Satisfactory,
            101..=200 => Self::Moderate,
            201..=300 => Self::Poor,
            301..=400 => Self::VeryPoor,
            _         => Self::Severe,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good         => "good",
            Self::Satisfactory => "satisfactory",
            Self::Moderate     => "moderate",
            Self::Poor         => "poor",
            Self::VeryPoor     => "very_poor",
            Self::Severe       => "severe",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
