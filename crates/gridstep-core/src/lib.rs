//! **gridstep-core** — Incremental grid pathfinding (core geometry types).
//!
//! This crate provides the foundational types shared across the *gridstep*
//! workspace: at present the integer [`Point`] used as both a cell position
//! and a grid size.

pub mod geom;

pub use geom::Point;
