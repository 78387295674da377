//! Grid pathfinding served through [`unit_core::NavigationOracle`].
use std::collections::{BTreeSet, HashMap, VecDeque};

use unit_core::{MapDimensions, NavigationOracle, Position, Unit, WalkGoal, World};

/// Neighbor order: orthogonal first, then diagonals, so ties resolve the
/// same way on every peer.
const NEIGHBORS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];

/// Breadth-first search over static walls.
///
/// Searches ignore other units; the walkability check applied to every step
/// accounts for them. Diagonal steps may not cut wall corners.
pub struct GridNavigator {
    dimensions: MapDimensions,
    walls: BTreeSet<Position>,
    max_search_nodes: usize,
}

impl GridNavigator {
    pub const DEFAULT_MAX_SEARCH_NODES: usize = 16_384;

    pub fn new(dimensions: MapDimensions, walls: BTreeSet<Position>) -> Self {
        Self {
            dimensions,
            walls,
            max_search_nodes: Self::DEFAULT_MAX_SEARCH_NODES,
        }
    }

    /// Open map without walls.
    pub fn open(dimensions: MapDimensions) -> Self {
        Self::new(dimensions, BTreeSet::new())
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn is_wall(&self, cell: Position) -> bool {
        self.walls.contains(&cell)
    }

    /// Footprint of `unit` fits at `origin` without touching walls.
    fn fits(&self, unit: &Unit, origin: Position) -> bool {
        let area = unit.area_at(origin);
        self.dimensions.contains_area(&area) && area.cells().all(|cell| !self.is_wall(cell))
    }

    fn can_step(&self, unit: &Unit, from: Position, dx: i32, dy: i32) -> bool {
        let to = Position::new(from.x + dx, from.y + dy);
        if !self.fits(unit, to) {
            return false;
        }
        if dx != 0 && dy != 0 {
            return self.fits(unit, Position::new(from.x + dx, from.y))
                && self.fits(unit, Position::new(from.x, from.y + dy));
        }
        true
    }
}

impl NavigationOracle for GridNavigator {
    fn next_step(
        &self,
        _world: &World,
        unit: &Unit,
        goal: WalkGoal,
        stand_off: f32,
    ) -> Option<Position> {
        let goal = goal.area();
        let arrived = |origin: Position| unit.area_at(origin).distance_to(&goal) <= stand_off;

        let start = unit.position;
        if arrived(start) {
            return None;
        }

        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut frontier = VecDeque::from([start]);
        came_from.insert(start, start);

        while let Some(current) = frontier.pop_front() {
            if arrived(current) {
                let mut step = current;
                while let Some(&previous) = came_from.get(&step) {
                    if previous == start {
                        return Some(step);
                    }
                    step = previous;
                }
                return None;
            }
            if came_from.len() >= self.max_search_nodes {
                tracing::trace!(unit = %unit.id, "path search exhausted node budget");
                return None;
            }

            for (dx, dy) in NEIGHBORS {
                let next = Position::new(current.x + dx, current.y + dy);
                if came_from.contains_key(&next) || !self.can_step(unit, current, dx, dy) {
                    continue;
                }
                came_from.insert(next, current);
                frontier.push_back(next);
            }
        }
        None
    }

    fn is_walkable_for(
        &self,
        world: &World,
        unit: &Unit,
        cell: Position,
        exclude_self: bool,
    ) -> bool {
        let exclude = exclude_self.then_some(unit.id);
        self.fits(unit, cell)
            && unit
                .area_at(cell)
                .cells()
                .all(|c| !world.is_occupied(c, exclude))
    }
}
