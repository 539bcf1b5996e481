//! `aq-output` — result writers for the aq_reroute engine.
//!
//! The engine itself never touches the filesystem.  This crate flattens its
//! typed results into plain rows and writes them through an
//! [`OutputWriter`] backend.
//!
//! | Backend     | Files created                                                        |
//! |-------------|----------------------------------------------------------------------|
//! | CSV         | `road_assessments.csv`, `traffic_distribution.csv`, `heatmap_grid.csv` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use aq_output::{AssessmentRow, CsvWriter, OutputWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! let rows: Vec<_> = selection.ordered.iter().map(AssessmentRow::from).collect();
//! writer.write_assessments(&rows)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{AssessmentRow, DistributionRow, GridRow};
pub use writer::OutputWriter;
