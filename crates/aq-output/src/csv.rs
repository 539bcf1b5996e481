//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `road_assessments.csv`
//! - `traffic_distribution.csv`
//! - `heatmap_grid.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AssessmentRow, DistributionRow, GridRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes engine output to three CSV files.
pub struct CsvWriter {
    assessments:  Writer<File>,
    distribution: Writer<File>,
    grid:         Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut assessments = Writer::from_path(dir.join("road_assessments.csv"))?;
        assessments.write_record(["road_id", "name", "lat", "lon", "severity", "congestion", "needs_action"])?;

        let mut distribution = Writer::from_path(dir.join("traffic_distribution.csv"))?;
        distribution.write_record([
            "blocked_road_id",
            "action",
            "rank",
            "road_id",
            "name",
            "via",
            "length_km",
            "traffic_share_pct",
            "severity",
            "projected_severity",
        ])?;

        let mut grid = Writer::from_path(dir.join("heatmap_grid.csv"))?;
        grid.write_record(["row", "col", "lat", "lon", "severity", "label"])?;

        Ok(Self {
            assessments,
            distribution,
            grid,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_assessments(&mut self, rows: &[AssessmentRow]) -> OutputResult<()> {
        for row in rows {
            self.assessments.write_record(&[
                row.road_id.clone(),
                row.name.clone(),
                row.lat.to_string(),
                row.lon.to_string(),
                row.severity.to_string(),
                row.congestion.to_owned(),
                (row.needs_action as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_distribution(&mut self, rows: &[DistributionRow]) -> OutputResult<()> {
        for row in rows {
            self.distribution.write_record(&[
                row.blocked_road_id.clone(),
                row.action.clone(),
                row.rank.to_string(),
                row.road_id.clone(),
                row.name.clone(),
                row.via.clone(),
                row.length_km.to_string(),
                format!("{:.1}", row.traffic_share_pct),
                row.severity.to_string(),
                row.projected_severity.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_grid(&mut self, rows: &[GridRow]) -> OutputResult<()> {
        for row in rows {
            self.grid.write_record(&[
                row.row.to_string(),
                row.col.to_string(),
                format!("{:.4}", row.lat),
                format!("{:.4}", row.lon),
                row.severity.to_string(),
                row.label.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.assessments.flush()?;
        self.distribution.flush()?;
        self.grid.flush()?;
        Ok(())
    }
}
