use crate::state::{Area, Position, Unit, World};

/// Where a unit wants to walk: a single cell or another unit's footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WalkGoal {
    Cell(Position),
    Area(Area),
}

impl WalkGoal {
    /// Cells the goal covers.
    pub fn area(&self) -> Area {
        match *self {
            WalkGoal::Cell(position) => Area::cell(position),
            WalkGoal::Area(area) => area,
        }
    }
}

/// Pathfinding engine consulted once per tick by walking states.
///
/// The core never searches paths itself; it asks for the next step and
/// validates it.
pub trait NavigationOracle: Send + Sync {
    /// Next cell on a path that brings `unit` within `stand_off` cells of
    /// `goal`, or `None` if no path exists or no step is needed.
    fn next_step(
        &self,
        world: &World,
        unit: &Unit,
        goal: WalkGoal,
        stand_off: f32,
    ) -> Option<Position>;

    /// Whether `unit` can stand at `cell` right now. With `exclude_self` the
    /// unit's own footprint does not count as an obstacle.
    fn is_walkable_for(&self, world: &World, unit: &Unit, cell: Position, exclude_self: bool)
    -> bool;
}
