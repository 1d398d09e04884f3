//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `path.csv`
//! - `edges.csv`
//! - `obstacles.csv`
//! - `progress.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::PlanWriter;
use crate::{EdgeRow, ObstacleRow, OutputResult, PathRow, ProgressRow};

/// Writes plan output to four CSV files.
pub struct CsvWriter {
    path:      Writer<File>,
    edges:     Writer<File>,
    obstacles: Writer<File>,
    progress:  Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut path = Writer::from_path(dir.join("path.csv"))?;
        path.write_record(["seq", "vertex", "x", "y"])?;

        let mut edges = Writer::from_path(dir.join("edges.csv"))?;
        edges.write_record(["from", "to", "x0", "y0", "x1", "y1"])?;

        let mut obstacles = Writer::from_path(dir.join("obstacles.csv"))?;
        obstacles.write_record(["obstacle", "vertex", "expanded", "x", "y"])?;

        let mut progress = Writer::from_path(dir.join("progress.csv"))?;
        progress.write_record(["iteration", "vertices"])?;

        Ok(Self { path, edges, obstacles, progress, finished: false })
    }
}

impl PlanWriter for CsvWriter {
    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        for row in rows {
            self.path.write_record(&[
                row.seq.to_string(),
                row.vertex.0.to_string(),
                row.point.x.to_string(),
                row.point.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_edges(&mut self, rows: &[EdgeRow]) -> OutputResult<()> {
        for row in rows {
            self.edges.write_record(&[
                row.from.0.to_string(),
                row.to.0.to_string(),
                row.from_point.x.to_string(),
                row.from_point.y.to_string(),
                row.to_point.x.to_string(),
                row.to_point.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_obstacles(&mut self, rows: &[ObstacleRow]) -> OutputResult<()> {
        for row in rows {
            self.obstacles.write_record(&[
                row.obstacle.to_string(),
                row.vertex.to_string(),
                (row.expanded as u8).to_string(),
                row.point.x.to_string(),
                row.point.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_progress(&mut self, row: &ProgressRow) -> OutputResult<()> {
        self.progress.write_record(&[row.iteration.to_string(), row.vertices.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.path.flush()?;
        self.edges.flush()?;
        self.obstacles.flush()?;
        self.progress.flush()?;
        Ok(())
    }
}
