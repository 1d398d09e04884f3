//! `PlanOutputObserver<W>`: bridges `PlannerObserver` to a `PlanWriter`.

use rrt_map::Map;
use rrt_planner::{Plan, PlannerObserver};

use crate::writer::{PlanWriter, edge_rows, obstacle_rows, path_rows};
use crate::{OutputError, OutputResult, ProgressRow};

/// A [`PlannerObserver`] that records progress every `interval` iterations
/// and writes the path and graph when the planner finishes.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the planner returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct PlanOutputObserver<W: PlanWriter> {
    writer:     W,
    interval:   usize,
    last_error: Option<OutputError>,
}

impl<W: PlanWriter> PlanOutputObserver<W> {
    /// `interval == 0` disables progress rows.
    pub fn new(writer: W, interval: usize) -> Self {
        Self { writer, interval, last_error: None }
    }

    /// Write `map`'s raw and expanded obstacles.  Call before planning.
    pub fn write_map(&mut self, map: &Map) {
        let result = self.writer.write_obstacles(&obstacle_rows(map));
        self.store_err(result);
    }

    /// Take the stored write error (if any) after the planner returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: PlanWriter> PlannerObserver for PlanOutputObserver<W> {
    fn on_iteration(&mut self, iteration: usize, vertices: usize) {
        if self.interval > 0 && iteration.is_multiple_of(self.interval) {
            let row = ProgressRow { iteration: iteration as u64, vertices: vertices as u64 };
            let result = self.writer.write_progress(&row);
            self.store_err(result);
        }
    }

    fn on_finish(&mut self, plan: &Plan) {
        let result = self
            .writer
            .write_path(&path_rows(plan))
            .and_then(|()| self.writer.write_edges(&edge_rows(plan)))
            .and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}
