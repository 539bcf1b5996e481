//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AssessmentRow, DistributionRow, GridRow, OutputResult};

/// Trait implemented by output backends.
pub trait OutputWriter {
    /// Write a batch of road assessments.
    fn write_assessments(&mut self, rows: &[AssessmentRow]) -> OutputResult<()>;

    /// Write the traffic distribution of one reallocation.
    fn write_distribution(&mut self, rows: &[DistributionRow]) -> OutputResult<()>;

    /// Write heatmap grid points.
    fn write_grid(&mut self, rows: &[GridRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
