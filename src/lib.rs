mod cell;
mod geometry;
mod loader;
mod puzzle;
mod trace;

pub use cell::Cell;
pub use geometry::Geometry;
pub use loader::{load_file, load_str, LoadError};
pub use puzzle::{Puzzle, SolveError, Status};
pub use trace::TraceEvent;
