use std::fmt;

/// One entry in the solve log.
///
/// Coordinates are 1-based, matching the grid as a human reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// A value was removed from a peer's candidates.
    Prune { row: usize, col: usize, value: u16 },
    /// A prune left the cell with `value` as its only candidate.
    Constrained { row: usize, col: usize, value: u16 },
    /// A cell was pinned to a known value.
    Force { row: usize, col: usize, value: u16 },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Prune { row, col, value } => {
                write!(f, "Prune {value} from ({row}, {col})")
            }
            TraceEvent::Constrained { row, col, value } => {
                write!(f, "Constrained ({row}, {col}) to {value}")
            }
            TraceEvent::Force { row, col, value } => {
                write!(f, "Set ({row}, {col}) to {value}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_render_as_solve_log_lines() {
        let cases = [
            (
                TraceEvent::Prune {
                    row: 1,
                    col: 2,
                    value: 5,
                },
                "Prune 5 from (1, 2)",
            ),
            (
                TraceEvent::Constrained {
                    row: 3,
                    col: 4,
                    value: 7,
                },
                "Constrained (3, 4) to 7",
            ),
            (
                TraceEvent::Force {
                    row: 9,
                    col: 9,
                    value: 1,
                },
                "Set (9, 9) to 1",
            ),
        ];
        for (event, expected) in cases {
            assert_eq!(event.to_string(), expected);
        }
    }
}
