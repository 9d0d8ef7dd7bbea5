use gridstep_core::Point;

/// The host-side grid capability consumed by the search.
///
/// The required method reports cell occupancy; the engine treats the grid
/// as read-only and never caches traversability across calls. The three
/// provided methods are advisory visualization hooks — a host that keeps
/// the default no-op bodies still gets a fully correct search.
pub trait GridHost {
    /// Whether the cell at `p` can be entered. Only queried for in-bounds
    /// positions.
    fn traversable(&self, p: Point) -> bool;

    /// A node entered the open set, or its cost was improved while there.
    ///
    /// `parent_offset` points from `p` towards its predecessor, and is
    /// [`Point::ZERO`] for the start node.
    fn on_discovered(&mut self, p: Point, g: i32, h: i32, f: i32, parent_offset: Point) {
        let _ = (p, g, h, f, parent_offset);
    }

    /// A node was moved to the closed set: every expanded node, and the
    /// goal itself when its discovery ends the search.
    fn on_finalized(&mut self, p: Point) {
        let _ = p;
    }

    /// A node was confirmed to lie on the final path.
    fn on_path(&mut self, p: Point) {
        let _ = p;
    }
}
