//! Neighbourhood queries and predicate-bounded flood fill.

use std::collections::{BTreeSet, VecDeque};

use glam::IVec2;

use atomfront_core::types::TileRef;

use crate::grid::GameMap;

/// Four-neighbourhood offsets in visiting order: west, east, north, south.
const NEIGHBOR_OFFSETS: [IVec2; 4] = [
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(0, -1),
    IVec2::new(0, 1),
];

impl GameMap {
    /// In-grid orthogonal neighbours of `tile`, in a fixed order.
    pub fn neighbors(&self, tile: TileRef) -> impl Iterator<Item = TileRef> + '_ {
        let origin = self.coords(tile);
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |offset| self.ref_at_coords(origin + *offset))
    }

    /// Breadth-first flood fill from `start` over tiles accepted by `filter`.
    ///
    /// `start` itself must pass the filter or the result is empty. A tile
    /// rejected once may be offered to the filter again when reached from
    /// another accepted neighbour. Visiting order is deterministic, so
    /// stateful filters (random draws) replay identically.
    pub fn bfs<F>(&self, start: TileRef, mut filter: F) -> BTreeSet<TileRef>
    where
        F: FnMut(&GameMap, TileRef) -> bool,
    {
        let mut seen = BTreeSet::new();
        if !self.is_valid(start) || !filter(self, start) {
            return seen;
        }
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in self.neighbors(current) {
                if !seen.contains(&next) && filter(self, next) {
                    seen.insert(next);
                    queue.push_back(next);
                }
            }
        }
        seen
    }
}
