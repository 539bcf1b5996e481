//! Traffic interventions and their modelled effect on the restricted road.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An intervention applied to the blocked/restricted road.
///
/// Parsed from the wire names `block`, `restrict_heavy`, and
/// `optimize_lights`.  Anything else is kept verbatim as [`Other`] and
/// modelled as having no effect.
///
/// [`Other`]: TrafficAction::Other
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum TrafficAction {
    Block,
    RestrictHeavy,
    OptimizeLights,
    Other(String),
}

impl TrafficAction {
    /// Fraction by which the action lowers the restricted road's severity.
    ///
    /// | Action           | Factor |
    /// |------------------|--------|
    /// | `Block`          | 0.30   |
    /// | `RestrictHeavy`  | 0.15   |
    /// | `OptimizeLights` | 0.08   |
    /// | `Other(_)`       | 0.0    |
    pub fn reduction_factor(&self) -> f64 {
        match self {
            Self::Block          => 0.30,
            Self::RestrictHeavy  => 0.15,
            Self::OptimizeLights => 0.08,
            Self::Other(_)       => 0.0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Block          => "block",
            Self::RestrictHeavy  => "restrict_heavy",
            Self::OptimizeLights => "optimize_lights",
            Self::Other(s)       => s,
        }
    }
}

impl From<&str> for TrafficAction {
    fn from(s: &str) -> Self {
        match s {
            "block"           => Self::Block,
            "restrict_heavy"  => Self::RestrictHeavy,
            "optimize_lights" => Self::OptimizeLights,
            other             => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for TrafficAction {
    fn from(s: String) -> Self {
        match s.as_str() {
            "block" | "restrict_heavy" | "optimize_lights" => Self::from(s.as_str()),
            _ => Self::Other(s),
        }
    }
}

impl From<TrafficAction> for String {
    fn from(action: TrafficAction) -> String {
        match action {
            TrafficAction::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for TrafficAction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for TrafficAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
