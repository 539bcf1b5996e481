//! CSV station loader.
//!
//! # CSV format
//!
//! One row per station:
//!
//! ```csv
//! lat,lng,value
//! 28.6139,77.2090,340
//! 28.5355,77.3910,310
//! ```
//!
//! Values must be finite and non-negative.  An empty file loads as an empty
//! `Vec`; it is the estimator, not the loader, that rejects empty sets.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use aq_core::{AqError, AqResult, Station};

#[derive(Deserialize)]
struct StationRecord {
    lat:   f64,
    lng:   f64,
    value: f64,
}

/// Load stations from a CSV file.
pub fn load_stations_csv(path: &Path) -> AqResult<Vec<Station>> {
    let file = std::fs::File::open(path)?;
    load_stations_reader(file)
}

/// Like [`load_stations_csv`] but accepts any `Read` source.
pub fn load_stations_reader<R: Read>(reader: R) -> AqResult<Vec<Station>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut stations = Vec::new();

    for (line, result) in csv_reader.deserialize::<StationRecord>().enumerate() {
        let row = result.map_err(|e| AqError::Parse(e.to_string()))?;
        if !(row.lat.is_finite() && row.lng.is_finite()) {
            return Err(AqError::Parse(format!("station row {line}: non-finite coordinate")));
        }
        if !row.value.is_finite() || row.value < 0.0 {
            return Err(AqError::Parse(format!(
                "station row {line}: value {} is not a non-negative number",
                row.value
            )));
        }
        stations.push(Station::new(row.lat, row.lng, row.value));
    }

    Ok(stations)
}
