//! Fixed monitoring stations.

use crate::GeoPoint;

/// One monitoring station reading: a fixed position and its current
/// severity index.
///
/// Stations carry no identity beyond their position.  A station set is
/// supplied fresh to every evaluation call and never mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub position: GeoPoint,
    /// Severity index on an unbounded non-negative scale.
    pub value: f64,
}

impl Station {
    #[inline]
    pub fn new(lat: f64, lon: f64, value: f64) -> Self {
        Self { position: GeoPoint::new(lat, lon), value }
    }
}
