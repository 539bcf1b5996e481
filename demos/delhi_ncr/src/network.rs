//! Delhi NCR reference data: five monitoring stations and the eight-road
//! arterial catalog, embedded as CSV and loaded through the same loaders a
//! deployment would use for its data files.

use std::io::Cursor;

use anyhow::Result;

use aq_core::Station;
use aq_roads::{load_roads_reader, RoadRegistry};
use aq_spatial::{load_stations_reader, GridBounds, GridSteps};

// Central Delhi, Noida, Gurgaon, Faridabad, Ghaziabad.
const STATIONS_CSV: &str = "\
lat,lng,value\n\
28.6139,77.2090,340\n\
28.5355,77.3910,310\n\
28.4595,77.0266,290\n\
28.4089,77.3178,280\n\
28.6692,77.4538,360\n\
";

const ROADS_CSV: &str = "\
id,name,lat,lng,length_km,via\n\
1,Ring Road (South),28.5700,77.2200,8,\"AIIMS, Nehru Place\"\n\
2,ITO Intersection,28.6295,77.2450,2,Delhi Gate\n\
3,Outer Ring Road,28.5500,77.2000,12,Vasant Kunj\n\
4,DND Flyway,28.5800,77.3200,9,Noida\n\
5,NH-48 (Gurgaon),28.4900,77.0800,15,IGI Airport\n\
6,GT Karnal Road,28.7200,77.1500,10,Azadpur\n\
7,Mehrauli-Badarpur Rd,28.5100,77.2800,7,Saket\n\
8,Vikas Marg,28.6400,77.2800,5,Laxmi Nagar\n\
";

/// NCR bounding box covering all five stations.
pub const NCR_BOUNDS: GridBounds = GridBounds {
    lat_min: 28.40,
    lat_max: 28.88,
    lng_min: 76.85,
    lng_max: 77.55,
};

/// ~4 km lattice spacing; 13 × 19 = 247 points.
pub const NCR_STEPS: GridSteps = GridSteps { n_lat: 12, n_lng: 18 };

pub fn load_stations() -> Result<Vec<Station>> {
    Ok(load_stations_reader(Cursor::new(STATIONS_CSV))?)
}

pub fn load_roads() -> Result<RoadRegistry> {
    Ok(load_roads_reader(Cursor::new(ROADS_CSV))?)
}
