//! CSV road catalog loader.
//!
//! # CSV format
//!
//! One row per road, in catalog order:
//!
//! ```csv
//! id,name,lat,lng,length_km,via
//! 1,Ring Road (South),28.5700,77.2200,8,"AIIMS, Nehru Place"
//! 2,ITO Intersection,28.6295,77.2450,2,Delhi Gate
//! ```
//!
//! `via` may be empty.  The loaded rows go through the same validation as
//! [`RoadRegistry::new`], so a catalog with a non-positive length or a
//! duplicate id is rejected as a whole.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use aq_core::GeoPoint;

use crate::{RoadError, RoadRegistry, RoadRegistryBuilder, RoadSegment};

#[derive(Deserialize)]
struct RoadRecord {
    id:        String,
    name:      String,
    lat:       f64,
    lng:       f64,
    length_km: f64,
    #[serde(default)]
    via:       String,
}

/// Load a road catalog from a CSV file.
pub fn load_roads_csv(path: &Path) -> Result<RoadRegistry, RoadError> {
    let file = std::fs::File::open(path)?;
    load_roads_reader(file)
}

/// Like [`load_roads_csv`] but accepts any `Read` source.
pub fn load_roads_reader<R: Read>(reader: R) -> Result<RoadRegistry, RoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = RoadRegistryBuilder::new();

    for result in csv_reader.deserialize::<RoadRecord>() {
        let row = result.map_err(|e| RoadError::Parse(e.to_string()))?;
        builder.add_road(RoadSegment::new(
            row.id.trim(),
            row.name.trim(),
            GeoPoint::new(row.lat, row.lng),
            row.length_km,
            row.via.trim(),
        ));
    }

    builder.build()
}
