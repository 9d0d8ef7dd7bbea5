//! Resumable A* search over bounded 2D grids.
//!
//! This crate implements single-source, single-goal A* with 8-way movement
//! and fixed-point costs (straight 10, diagonal 14). The search is driven
//! one expansion at a time through [`Search::step`], so a host can
//! interleave progress with per-frame work, or run it to the end with
//! [`Search::run_to_completion`].
//!
//! The host supplies the map through the [`GridHost`] trait: a
//! traversability query plus optional no-op visualization hooks that fire
//! as cells are discovered, finalized, and confirmed on the final path.
//!
//! # Example
//!
//! ```
//! use gridstep_astar::{GridHost, Heuristic, Point, Search, StepOutcome};
//!
//! struct Open;
//! impl GridHost for Open {
//!     fn traversable(&self, _p: Point) -> bool {
//!         true
//!     }
//! }
//!
//! let mut grid = Open;
//! let mut search = Search::new();
//! search
//!     .init(&mut grid, Point::new(5, 5), Point::ZERO, Point::new(4, 4), Heuristic::Diagonal)
//!     .unwrap();
//! assert_eq!(search.run_to_completion(&mut grid).unwrap(), StepOutcome::Found);
//! let path = search.path(&mut grid).unwrap();
//! assert_eq!(path.len(), 5);
//! ```

mod cost;
mod engine;
mod error;
mod frontier;
mod traits;

pub use gridstep_core::Point;

pub use cost::{DIAGONAL_COST, Heuristic, STRAIGHT_COST, diagonal, euclidean, manhattan};
pub use engine::{Search, SearchState, StepOutcome};
pub use error::{ConfigError, SearchError};
pub use traits::GridHost;
