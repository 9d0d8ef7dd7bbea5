//! The search session state machine.

use gridstep_core::Point;

use crate::cost::{DIAGONAL_COST, Heuristic, STRAIGHT_COST};
use crate::error::{ConfigError, SearchError};
use crate::frontier::{Frontier, NO_PARENT};
use crate::traits::GridHost;

/// Lifecycle state of a [`Search`] session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// No session configured; only `init` is valid.
    Uninitialized,
    /// Configured, no expansion performed yet.
    Ready,
    /// At least one expansion performed, goal not yet reached.
    Running,
    /// The goal was discovered; the path can be reconstructed.
    Found,
    /// The open set drained without reaching the goal. Terminal.
    Exhausted,
}

/// Result of one [`Search::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// Work remains; call `step` again.
    Continuing,
    /// The goal was reached.
    Found,
    /// No path exists.
    Exhausted,
}

/// A resumable A* session over a bounded grid.
///
/// One expansion is performed per [`step`](Search::step) call, so a host can
/// budget search work per frame and interleave it with anything else. The
/// grid capability is borrowed per call rather than stored, so a session can
/// outlive any particular borrow of the host's map.
///
/// All internal storage is reused across sessions: `init` after `clear` (or
/// directly after a finished run) does not reallocate unless the grid grew.
pub struct Search {
    frontier: Frontier,
    size: Point,
    start: Point,
    goal: Point,
    heuristic: Heuristic,
    state: SearchState,
    goal_idx: Option<usize>,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    /// Create an empty, uninitialized session.
    pub fn new() -> Self {
        Self {
            frontier: Frontier::new(),
            size: Point::ZERO,
            start: Point::ZERO,
            goal: Point::ZERO,
            heuristic: Heuristic::default(),
            state: SearchState::Uninitialized,
            goal_idx: None,
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of discovered, not-yet-expanded nodes.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.frontier.open_len()
    }

    /// Number of finalized nodes.
    #[inline]
    pub fn closed_len(&self) -> usize {
        self.frontier.closed_len()
    }

    /// Configure a new session on a `size.x × size.y` grid, discarding any
    /// prior one.
    ///
    /// Rejects a degenerate grid, out-of-bounds or coincident endpoints, and
    /// endpoints on blocked cells. On success the start node is seeded into
    /// the open set and the session is `Ready`.
    pub fn init<G: GridHost>(
        &mut self,
        grid: &mut G,
        size: Point,
        start: Point,
        goal: Point,
        heuristic: Heuristic,
    ) -> Result<(), ConfigError> {
        if size.x <= 0 || size.y <= 0 {
            return Err(ConfigError::EmptyGrid(size));
        }
        if !start.in_grid(size) {
            return Err(ConfigError::StartOutOfBounds { pos: start, size });
        }
        if !goal.in_grid(size) {
            return Err(ConfigError::GoalOutOfBounds { pos: goal, size });
        }
        if start == goal {
            return Err(ConfigError::StartIsGoal(start));
        }
        if !grid.traversable(start) {
            return Err(ConfigError::StartBlocked(start));
        }
        if !grid.traversable(goal) {
            return Err(ConfigError::GoalBlocked(goal));
        }

        self.frontier.resize(size);
        self.size = size;
        self.start = start;
        self.goal = goal;
        self.heuristic = heuristic;
        self.goal_idx = None;

        let h = heuristic.estimate(start, goal);
        self.frontier.insert(start, 0, h, NO_PARENT);
        grid.on_discovered(start, 0, h, h, Point::ZERO);

        self.state = SearchState::Ready;
        log::debug!(
            "search init: {}x{} grid, {} -> {}, {:?}",
            size.x,
            size.y,
            start,
            goal,
            heuristic
        );
        Ok(())
    }

    /// Perform one unit of work: expand the best open node.
    ///
    /// Returns [`StepOutcome::Found`] when the goal is discovered among the
    /// expanded node's neighbours, [`StepOutcome::Exhausted`] when the open
    /// set has drained, and [`StepOutcome::Continuing`] otherwise. Only
    /// valid while the session is `Ready` or `Running`.
    pub fn step<G: GridHost>(&mut self, grid: &mut G) -> Result<StepOutcome, SearchError> {
        if !matches!(self.state, SearchState::Ready | SearchState::Running) {
            return Err(SearchError::InvalidState {
                op: "step",
                state: self.state,
            });
        }

        if self.frontier.is_empty() {
            self.state = SearchState::Exhausted;
            log::debug!("search exhausted: open set drained");
            return Ok(StepOutcome::Exhausted);
        }
        // Open-set accounting guarantees a live heap entry here.
        let Some(ci) = self.frontier.extract_best() else {
            self.state = SearchState::Exhausted;
            return Ok(StepOutcome::Exhausted);
        };
        let cp = self.frontier.point(ci);
        let cg = self.frontier.node(ci).g;

        'expand: for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let np = cp.shift(dx, dy);
                if !np.in_grid(self.size) {
                    continue;
                }
                let ni = self.frontier.idx(np);
                if self.frontier.in_closed(ni) {
                    continue;
                }
                if !grid.traversable(np) {
                    continue;
                }
                let move_cost = if dx == 0 || dy == 0 {
                    STRAIGHT_COST
                } else {
                    DIAGONAL_COST
                };
                let tentative = cg + move_cost;

                if np == self.goal {
                    let gi = self.frontier.finalize(np, tentative, 0, ci);
                    self.goal_idx = Some(gi);
                    self.state = SearchState::Found;
                    grid.on_finalized(np);
                    log::debug!("goal {} reached, cost {}", np, tentative);
                    break 'expand;
                }

                if let Some(existing) = self.frontier.open_node(ni) {
                    if tentative < existing.g {
                        self.frontier.update(ni, tentative, ci);
                        let n = self.frontier.node(ni);
                        let (g, h, f) = (n.g, n.h, n.f);
                        grid.on_discovered(np, g, h, f, cp - np);
                    }
                } else {
                    let h = self.heuristic.estimate(np, self.goal);
                    self.frontier.insert(np, tentative, h, ci);
                    grid.on_discovered(np, tentative, h, tentative + h, cp - np);
                }
            }
        }

        grid.on_finalized(cp);

        if self.state == SearchState::Found {
            Ok(StepOutcome::Found)
        } else {
            self.state = SearchState::Running;
            Ok(StepOutcome::Continuing)
        }
    }

    /// Step until the session terminates, returning the terminal outcome.
    ///
    /// A pure composition of [`step`](Search::step); fails like `step` if
    /// the session is not `Ready` or `Running`.
    pub fn run_to_completion<G: GridHost>(
        &mut self,
        grid: &mut G,
    ) -> Result<StepOutcome, SearchError> {
        loop {
            match self.step(grid)? {
                StepOutcome::Continuing => {}
                done => return Ok(done),
            }
        }
    }

    /// Reconstruct the path in start→goal order, both endpoints included.
    ///
    /// Emits [`GridHost::on_path`] for every cell, in path order. Only valid
    /// once the session is `Found`.
    pub fn path<G: GridHost>(&self, grid: &mut G) -> Result<Vec<Point>, SearchError> {
        if self.state != SearchState::Found {
            return Err(SearchError::PathNotAvailable(self.state));
        }
        let Some(goal_idx) = self.goal_idx else {
            return Err(SearchError::PathNotAvailable(self.state));
        };

        let mut path = Vec::new();
        let mut idx = goal_idx;
        loop {
            path.push(self.frontier.point(idx));
            let parent = self.frontier.node(idx).parent;
            if parent == NO_PARENT {
                break;
            }
            idx = parent;
        }
        path.reverse();

        for &p in &path {
            grid.on_path(p);
        }
        Ok(path)
    }

    /// Discard the session and return to `Uninitialized`. Storage is kept
    /// for reuse by the next `init`.
    pub fn clear(&mut self) {
        self.frontier.reset();
        self.goal_idx = None;
        self.state = SearchState::Uninitialized;
    }
}
