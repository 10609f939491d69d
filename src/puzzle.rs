use std::collections::VecDeque;
use std::fmt;

use colored::Colorize;
use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::cell::{Cell, Pruned};
use crate::geometry::Geometry;
use crate::trace::TraceEvent;

/// Error raised when propagation proves the puzzle unsatisfiable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("Cell ({row}, {col}) is already pinned to {value}: the puzzle is unsatisfiable")]
    Contradiction { row: usize, col: usize, value: u16 },
}

/// Terminal outcome of a drained work queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every cell holds exactly one candidate.
    Solved,
    /// Propagation ran out of naked singles with cells still undecided.
    Stalled { unsolved: usize },
}

/// The grid, its cells, and the work queue driving forced-value cascades.
///
/// [`Puzzle::set`] is the single mutation entry point: clues enter through
/// it at load time, and [`Puzzle::solve`] re-enters it for every queued
/// naked single until the queue drains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    geometry: Geometry,
    cells: Vec<Cell>,
    queue: VecDeque<usize>,
    trace: Vec<TraceEvent>,
}

impl Puzzle {
    pub fn new(dim: usize) -> Self {
        let geometry = Geometry::new(dim);
        let cells = (0..geometry.length)
            .map(|idx| Cell::new(geometry, idx))
            .collect_vec();
        Self {
            geometry,
            cells,
            queue: VecDeque::new(),
            trace: Vec::new(),
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn cell(&self, idx: usize) -> &Cell {
        assert!(idx < self.geometry.length, "Cell index {idx} out of range");
        &self.cells[idx]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Recorded events, in the order they happened.
    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    /// True when no forced assignments are waiting in the work queue.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Assign `value` to the cell at `idx`, removing it from the candidates
    /// of every other cell in the same row, column and block.
    ///
    /// A peer left with exactly one candidate is queued for
    /// [`Puzzle::solve`] to force later. Fails if a peer is already pinned
    /// to `value`, which proves the puzzle unsatisfiable.
    pub fn set(&mut self, idx: usize, value: u16) -> Result<(), SolveError> {
        assert!(idx < self.geometry.length, "Cell index {idx} out of range");
        assert!(
            (1..=self.geometry.size as u16).contains(&value),
            "Value {value} out of range"
        );
        // A peer shared between two groups is pruned twice; pruning is a
        // set-difference, so the second call is a no-op.
        let groups = [
            self.geometry.row(self.geometry.row_of(idx)),
            self.geometry.col(self.geometry.col_of(idx)),
            self.geometry.block(self.geometry.block_of(idx)),
        ];
        for peer in groups.into_iter().flatten() {
            if peer != idx {
                self.prune(peer, value)?;
            }
        }
        let (row, col) = self.cells[idx].coords();
        self.record(TraceEvent::Force { row, col, value });
        self.cells[idx].force(value);
        Ok(())
    }

    /// Pop queued cells and force each to its single remaining candidate
    /// until the queue is empty.
    ///
    /// Returns the number of forced assignments applied. An empty queue is
    /// the only exit: either the grid is fully decided or propagation has
    /// stalled, which [`Puzzle::status`] distinguishes.
    pub fn solve(&mut self) -> Result<usize, SolveError> {
        let mut steps = 0;
        while let Some(idx) = self.queue.pop_front() {
            let value = match self.cells[idx].value() {
                Some(value) => value,
                None => unreachable!("Queued cell holds more than one candidate"),
            };
            self.set(idx, value)?;
            steps += 1;
        }
        Ok(steps)
    }

    pub fn status(&self) -> Status {
        let unsolved = self.cells.iter().filter(|cell| !cell.is_solved()).count();
        if unsolved == 0 {
            Status::Solved
        } else {
            Status::Stalled { unsolved }
        }
    }

    fn prune(&mut self, idx: usize, value: u16) -> Result<(), SolveError> {
        let (row, col) = self.cells[idx].coords();
        self.record(TraceEvent::Prune { row, col, value });
        match self.cells[idx].prune(value) {
            Pruned::Conflict => Err(SolveError::Contradiction { row, col, value }),
            Pruned::Constrained(remaining) => {
                self.record(TraceEvent::Constrained {
                    row,
                    col,
                    value: remaining,
                });
                self.queue.push_back(idx);
                Ok(())
            }
            Pruned::Thinned | Pruned::Untouched => Ok(()),
        }
    }

    fn record(&mut self, event: TraceEvent) {
        debug!("{event}");
        self.trace.push(event);
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(4 * self.geometry.size + 2 * (self.geometry.dim - 1));
        for (n, cell) in self.cells.iter().enumerate() {
            match cell.value() {
                Some(value) => write!(f, " {value}  ")?,
                None => write!(f, "{} ", format!("[{}]", cell.candidate_count()).blue())?,
            }
            let col = n % self.geometry.size + 1;
            if col == self.geometry.size {
                writeln!(f)?;
                let row = n / self.geometry.size + 1;
                if row < self.geometry.size && row % self.geometry.dim == 0 {
                    writeln!(f, "{rule}")?;
                }
            } else if col % self.geometry.dim == 0 {
                write!(f, "| ")?;
            }
        }
        Ok(())
    }
}
