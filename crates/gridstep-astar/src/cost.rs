//! Movement costs and heuristic distance estimates.

use gridstep_core::Point;

/// Cost of a move between axis-aligned neighbours.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of a move between diagonal neighbours (√2 × 10, fixed-point).
pub const DIAGONAL_COST: i32 = 14;

/// Heuristic used to estimate the remaining cost to the goal.
///
/// [`Heuristic::Diagonal`] matches the 8-way movement model exactly and is
/// the recommended default. Manhattan and Euclidean can overestimate across
/// diagonal moves (Euclidean because of its ceiling rounding); they are
/// retained for comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `STRAIGHT_COST × (|dx| + |dy|)`.
    Manhattan,
    /// Octile distance: `DIAGONAL_COST × min(|dx|, |dy|) + STRAIGHT_COST × |dx − dy|`.
    #[default]
    Diagonal,
    /// `ceil(√((dx × STRAIGHT_COST)² + (dy × STRAIGHT_COST)²))`.
    Euclidean,
}

impl Heuristic {
    /// Estimated cost from `from` to `to` under this heuristic.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Diagonal => diagonal(from, to),
            Heuristic::Euclidean => euclidean(from, to),
        }
    }
}

/// Manhattan (L1) distance between two points, scaled by [`STRAIGHT_COST`].
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    STRAIGHT_COST * ((a.x - b.x).abs() + (a.y - b.y).abs())
}

/// Octile distance between two points: diagonal steps cover the shared
/// extent of both axes, straight steps cover the rest.
#[inline]
pub fn diagonal(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    DIAGONAL_COST * dx.min(dy) + STRAIGHT_COST * (dx - dy).abs()
}

/// Euclidean (L2) distance between two points, scaled by [`STRAIGHT_COST`]
/// and rounded up to the next integer.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    let dx = ((a.x - b.x) * STRAIGHT_COST) as i64;
    let dy = ((a.y - b.y) * STRAIGHT_COST) as i64;
    ceil_sqrt((dx * dx + dy * dy) as u64) as i32
}

/// Integer ⌈√v⌉.
#[inline]
fn ceil_sqrt(v: u64) -> u64 {
    let s = v.isqrt();
    if s * s < v { s + 1 } else { s }
}
