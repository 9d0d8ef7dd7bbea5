//! Error types. Exhaustion (no path exists) is reported through
//! [`StepOutcome::Exhausted`](crate::StepOutcome::Exhausted), not here —
//! these cover rejected configurations and misuse of the state machine.

use gridstep_core::Point;
use thiserror::Error;

use crate::engine::SearchState;

/// A configuration rejected by [`Search::init`](crate::Search::init).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Start and goal name the same cell.
    #[error("start and goal are both {0}")]
    StartIsGoal(Point),

    /// The start position lies outside the grid.
    #[error("start {pos} is outside the {size} grid")]
    StartOutOfBounds { pos: Point, size: Point },

    /// The goal position lies outside the grid.
    #[error("goal {pos} is outside the {size} grid")]
    GoalOutOfBounds { pos: Point, size: Point },

    /// The start cell is not traversable.
    #[error("start cell {0} is blocked")]
    StartBlocked(Point),

    /// The goal cell is not traversable.
    #[error("goal cell {0} is blocked")]
    GoalBlocked(Point),

    /// The grid has no cells.
    #[error("grid size {0} has no cells")]
    EmptyGrid(Point),
}

/// Misuse of the search state machine after a successful `init`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The operation is not allowed in the current state, e.g. stepping a
    /// search that already terminated.
    #[error("{op} is not valid in the {state:?} state")]
    InvalidState {
        op: &'static str,
        state: SearchState,
    },

    /// No path has been found, so there is nothing to reconstruct.
    #[error("no path available in the {0:?} state")]
    PathNotAvailable(SearchState),
}
