//! Static road catalog entries.

use aq_core::GeoPoint;

/// One physical road, represented by a single reference coordinate.
///
/// Catalog entries are never mutated after load.  `length_km > 0` is
/// enforced by [`RoadRegistry`](crate::RoadRegistry) construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadSegment {
    /// Unique within a catalog.
    pub id:        String,
    pub name:      String,
    pub position:  GeoPoint,
    pub length_km: f64,
    /// Free-text landmarks the road passes through.
    pub via:       String,
}

impl RoadSegment {
    pub fn new(
        id:        impl Into<String>,
        name:      impl Into<String>,
        position:  GeoPoint,
        length_km: f64,
        via:       impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            length_km,
            via: via.into(),
        }
    }
}
