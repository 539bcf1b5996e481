//! Integration tests for aq-output.

#[cfg(test)]
mod helpers {
    use aq_core::{GeoPoint, Station};
    use aq_roads::{RoadRegistry, RoadSegment};

    pub fn stations() -> Vec<Station> {
        vec![
            Station::new(28.6139, 77.2090, 340.0),
            Station::new(28.5355, 77.3910, 310.0),
            Station::new(28.4595, 77.0266, 290.0),
        ]
    }

    pub fn roads() -> RoadRegistry {
        RoadRegistry::new(vec![
            RoadSegment::new("1", "Ring Road (South)", GeoPoint::new(28.57, 77.22), 8.0, "AIIMS, Nehru Place"),
            RoadSegment::new("2", "ITO Intersection", GeoPoint::new(28.6295, 77.245), 2.0, "Delhi Gate"),
            RoadSegment::new("3", "Outer Ring Road", GeoPoint::new(28.55, 77.20), 12.0, "Vasant Kunj"),
        ])
        .expect("valid catalog")
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use aq_reroute::{reallocate, TrafficAction};
    use aq_roads::{map_roads, select_critical};
    use aq_spatial::{generate_grid, GridBounds, GridSteps};

    use crate::csv::CsvWriter;
    use crate::row::{AssessmentRow, DistributionRow, GridRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("road_assessments.csv").exists());
        assert!(dir.path().join("traffic_distribution.csv").exists());
        assert!(dir.path().join("heatmap_grid.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (h, _) = read(&dir, "road_assessments.csv");
        assert_eq!(h, ["road_id", "name", "lat", "lon", "severity", "congestion", "needs_action"]);
        let (h, _) = read(&dir, "heatmap_grid.csv");
        assert_eq!(h, ["row", "col", "lat", "lon", "severity", "label"]);
        let (h, _) = read(&dir, "traffic_distribution.csv");
        assert_eq!(h[0], "blocked_road_id");
        assert_eq!(h.len(), 10);
    }

    #[test]
    fn assessments_written_worst_first() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let roads = super::helpers::roads();
        let selection = select_critical(map_roads(roads.roads(), &super::helpers::stations()).unwrap());
        let rows: Vec<_> = selection.ordered.iter().map(AssessmentRow::from).collect();
        w.write_assessments(&rows).unwrap();
        w.finish().unwrap();

        let (_, records) = read(&dir, "road_assessments.csv");
        assert_eq!(records.len(), 3);
        for (rec, row) in records.iter().zip(&rows) {
            assert_eq!(&rec[0], row.road_id);
            assert_eq!(&rec[4], row.severity.to_string());
            assert_eq!(&rec[5], row.congestion);
        }
    }

    #[test]
    fn distribution_rows_ranked() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let result = reallocate(
            "1",
            &TrafficAction::Block,
            &super::helpers::roads(),
            &super::helpers::stations(),
        )
        .unwrap();
        let rows = DistributionRow::from_result(&result);
        assert_eq!(rows.len(), 2);
        w.write_distribution(&rows).unwrap();
        w.finish().unwrap();

        let (_, records) = read(&dir, "traffic_distribution.csv");
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "1");      // blocked_road_id
        assert_eq!(&records[0][1], "block");  // action
        assert_eq!(&records[0][2], "1");      // rank
        assert_eq!(&records[1][2], "2");
        assert_eq!(&records[0][3], result.alternatives[0].road.id);
    }

    #[test]
    fn grid_rows_in_lattice_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let grid = generate_grid(
            &super::helpers::stations(),
            GridBounds { lat_min: 28.40, lat_max: 28.88, lng_min: 76.85, lng_max: 77.55 },
            GridSteps { n_lat: 2, n_lng: 3 },
        )
        .unwrap();
        let rows: Vec<_> = grid.points.iter().map(GridRow::from).collect();
        w.write_grid(&rows).unwrap();
        w.finish().unwrap();

        let (_, records) = read(&dir, "heatmap_grid.csv");
        assert_eq!(records.len(), 12);
        assert_eq!(&records[0][2], "28.4000");
        assert_eq!(&records[0][3], "76.8500");
        assert_eq!((&records[4][0], &records[4][1]), ("1", "0"));
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_assessments(&[]).unwrap();
        w.write_distribution(&[]).unwrap();
        w.write_grid(&[]).unwrap();
    }
}
