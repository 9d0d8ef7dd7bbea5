//! Open/closed bookkeeping for the search.
//!
//! Nodes live in a flat arena indexed by `y * width + x`, with a generation
//! counter for lazy bulk clearing: bumping the counter invalidates every
//! node without touching memory. The open set is a binary heap over the
//! arena ordered by ascending `f`, ties broken by ascending `h`.
//! Decrease-key is lazy: improving a node pushes a fresh heap entry and the
//! stale one is skipped when popped.

use std::collections::BinaryHeap;

use gridstep_core::Point;

/// Sentinel parent index for the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Status {
    Open,
    Closed,
}

/// Per-position search record. Valid only while its generation matches the
/// frontier's; stale nodes are treated as undiscovered.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    generation: u32,
    status: Status,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            f: 0,
            parent: NO_PARENT,
            generation: 0,
            status: Status::Open,
        }
    }
}

/// Heap entry referencing a node in the arena.
#[derive(Clone, Copy, Eq, PartialEq)]
struct HeapEntry {
    idx: usize,
    f: i32,
    h: i32,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; equal f
        // prefers the node estimated closer to the goal.
        other.f.cmp(&self.f).then_with(|| other.h.cmp(&self.h))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Node arena plus the open-set heap and open/closed accounting for one
/// search session.
pub(crate) struct Frontier {
    nodes: Vec<Node>,
    heap: BinaryHeap<HeapEntry>,
    generation: u32,
    width: usize,
    open_count: usize,
    closed_count: usize,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            heap: BinaryHeap::new(),
            generation: 0,
            width: 0,
            open_count: 0,
            closed_count: 0,
        }
    }

    /// Prepare the arena for a `size.x × size.y` grid, discarding any prior
    /// session. Keeps the allocation when the new grid fits in it.
    pub(crate) fn resize(&mut self, size: Point) {
        let len = (size.x as usize) * (size.y as usize);
        self.width = size.x as usize;
        if len <= self.nodes.len() {
            self.reset();
        } else {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 1;
            self.heap.clear();
            self.open_count = 0;
            self.closed_count = 0;
        }
    }

    /// Drop every node by bumping the generation. O(1) apart from the heap.
    pub(crate) fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.heap.clear();
        self.open_count = 0;
        self.closed_count = 0;
    }

    /// Flat arena index of an in-bounds position.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> usize {
        (p.y as usize) * self.width + p.x as usize
    }

    /// Position of an arena index.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// The node at `idx`, regardless of open/closed status. Callers only
    /// use this for indices they know are live.
    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    fn live(&self, idx: usize) -> Option<&Node> {
        let n = &self.nodes[idx];
        (n.generation == self.generation).then_some(n)
    }

    /// The node at `idx` if it is currently in the open set.
    #[inline]
    pub(crate) fn open_node(&self, idx: usize) -> Option<&Node> {
        self.live(idx).filter(|n| n.status == Status::Open)
    }

    /// Whether the position at `idx` has been expanded.
    #[inline]
    pub(crate) fn in_closed(&self, idx: usize) -> bool {
        self.live(idx).is_some_and(|n| n.status == Status::Closed)
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.open_count == 0
    }

    #[inline]
    pub(crate) fn open_len(&self) -> usize {
        self.open_count
    }

    #[inline]
    pub(crate) fn closed_len(&self) -> usize {
        self.closed_count
    }

    /// Discover a new position: create its node and add it to the open set.
    pub(crate) fn insert(&mut self, p: Point, g: i32, h: i32, parent: usize) {
        let idx = self.idx(p);
        self.nodes[idx] = Node {
            g,
            h,
            f: g + h,
            parent,
            generation: self.generation,
            status: Status::Open,
        };
        self.heap.push(HeapEntry { idx, f: g + h, h });
        self.open_count += 1;
    }

    /// Improve an open node with a strictly lower `g` and a new predecessor.
    /// `f` is recomputed; the superseded heap entry dies lazily.
    pub(crate) fn update(&mut self, idx: usize, g: i32, parent: usize) {
        let node = &mut self.nodes[idx];
        debug_assert!(g < node.g);
        node.g = g;
        node.f = g + node.h;
        node.parent = parent;
        self.heap.push(HeapEntry {
            idx,
            f: node.f,
            h: node.h,
        });
    }

    /// Remove the best open node (lowest `f`, then lowest `h`), finalize it
    /// into the closed set, and return its arena index. `None` when the open
    /// set is empty.
    pub(crate) fn extract_best(&mut self) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            let node = &mut self.nodes[entry.idx];
            if node.generation != self.generation
                || node.status != Status::Open
                || node.f != entry.f
            {
                // Superseded by an update, or left over from a past session.
                continue;
            }
            node.status = Status::Closed;
            self.open_count -= 1;
            self.closed_count += 1;
            return Some(entry.idx);
        }
        None
    }

    /// Write a node straight into the closed set, bypassing the open set.
    /// Used for the goal, whose discovery ends the search.
    pub(crate) fn finalize(&mut self, p: Point, g: i32, h: i32, parent: usize) -> usize {
        let idx = self.idx(p);
        self.nodes[idx] = Node {
            g,
            h,
            f: g + h,
            parent,
            generation: self.generation,
            status: Status::Closed,
        };
        self.closed_count += 1;
        idx
    }
}
