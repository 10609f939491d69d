use std::path::Path;
use std::{fs, io};

use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::puzzle::{Puzzle, SolveError};

/// Error raised for puzzle texts the loader rejects.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Clue {value} at ({row}, {col}) is outside 1..={size}")]
    ClueOutOfRange {
        value: u32,
        row: usize,
        col: usize,
        size: usize,
    },
    #[error("Expected {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },
    #[error(transparent)]
    Unsatisfiable(#[from] SolveError),
}

/// Feed the clues in `text` into `puzzle` in row-major order.
///
/// `|` and whitespace are visual noise and lines made of dashes are
/// rules; both are skipped. Every other character is one cell: a digit is
/// a clue passed to [`Puzzle::set`], anything else leaves the cell
/// unknown.
pub fn load_str(puzzle: &mut Puzzle, text: &str) -> Result<(), LoadError> {
    let geometry = puzzle.geometry();
    let cells = text
        .lines()
        .filter(|line| !is_rule(line))
        .flat_map(|line| line.chars())
        .filter(|c| !c.is_whitespace() && *c != '|')
        .collect_vec();
    if cells.len() != geometry.length {
        return Err(LoadError::WrongCellCount {
            expected: geometry.length,
            found: cells.len(),
        });
    }
    for (idx, c) in cells.into_iter().enumerate() {
        if let Some(value) = c.to_digit(10) {
            if value == 0 || value > geometry.size as u32 {
                return Err(LoadError::ClueOutOfRange {
                    value,
                    row: idx / geometry.size + 1,
                    col: idx % geometry.size + 1,
                    size: geometry.size,
                });
            }
            puzzle.set(idx, value as u16)?;
        }
    }
    Ok(())
}

/// Load the puzzle file at `path` via [`load_str`].
pub fn load_file(puzzle: &mut Puzzle, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let path = path.as_ref();
    debug!("Loading puzzle from {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_str(puzzle, &text)
}

/// A visual row separator: dashes, optionally mixed with `|` and spaces.
fn is_rule(line: &str) -> bool {
    let mut dashes = false;
    for c in line.chars() {
        match c {
            '-' => dashes = true,
            c if c.is_whitespace() || c == '|' => {}
            _ => return false,
        }
    }
    dashes
}
