use std::fmt;

/// Unique identifier for any unit tracked in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two cells.
    pub fn distance_to(self, other: Position) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Discrete simulation step. The world advances one tick at a time at a fixed rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    /// Number of ticks elapsed since `earlier`, zero if `earlier` is in the future.
    pub const fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Facing direction of a unit.
///
/// A full turn is 256 units. Angle 0 points toward +x and values grow toward +y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle(pub u8);

impl Angle {
    /// Number of angle units in a full turn.
    pub const FULL_TURN: u32 = 256;

    /// Angle pointing from `from` to `to` (both in continuous cell space),
    /// snapped to the nearest multiple of `step` angle units.
    ///
    /// Returns `None` when the two points coincide.
    pub fn between(from: (f32, f32), to: (f32, f32), step: u32) -> Option<Angle> {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        let turns = dy.atan2(dx) / std::f32::consts::TAU;
        let units = (turns * Self::FULL_TURN as f32).rem_euclid(Self::FULL_TURN as f32);
        let step = step.clamp(1, Self::FULL_TURN);
        let snapped = ((units / step as f32).round() as u32 * step) % Self::FULL_TURN;
        Some(Angle(snapped as u8))
    }
}

/// Size of the rectangular set of cells a unit occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub const SINGLE: Self = Self {
        width: 1,
        height: 1,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Cells covered when the footprint is anchored at `origin`.
    pub const fn at(self, origin: Position) -> Area {
        Area {
            origin,
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// Axis-aligned rectangle of cells anchored at its top-left cell.
///
/// A zero-sized area is treated as the single cell at `origin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub origin: Position,
    pub width: u32,
    pub height: u32,
}

impl Area {
    pub const fn cell(position: Position) -> Self {
        Self {
            origin: position,
            width: 1,
            height: 1,
        }
    }

    fn max_x(&self) -> i32 {
        self.origin.x + self.width.max(1) as i32 - 1
    }

    fn max_y(&self) -> i32 {
        self.origin.y + self.height.max(1) as i32 - 1
    }

    pub fn contains(&self, cell: Position) -> bool {
        cell.x >= self.origin.x
            && cell.y >= self.origin.y
            && cell.x <= self.max_x()
            && cell.y <= self.max_y()
    }

    /// Iterates every covered cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.origin.y..=self.max_y())
            .flat_map(move |y| (self.origin.x..=self.max_x()).map(move |x| Position::new(x, y)))
    }

    /// Continuous-space center of the area.
    pub fn center(&self) -> (f32, f32) {
        (
            self.origin.x as f32 + self.width.max(1) as f32 / 2.0,
            self.origin.y as f32 + self.height.max(1) as f32 / 2.0,
        )
    }

    /// Covered cell nearest to `cell`.
    pub fn closest_point_to(&self, cell: Position) -> Position {
        Position::new(
            cell.x.clamp(self.origin.x, self.max_x()),
            cell.y.clamp(self.origin.y, self.max_y()),
        )
    }

    /// Covered cell nearest to any cell of `other`.
    pub fn closest_point_to_area(&self, other: &Area) -> Position {
        let x = if other.max_x() < self.origin.x {
            self.origin.x
        } else if other.origin.x > self.max_x() {
            self.max_x()
        } else {
            other.origin.x.clamp(self.origin.x, self.max_x())
        };
        let y = if other.max_y() < self.origin.y {
            self.origin.y
        } else if other.origin.y > self.max_y() {
            self.max_y()
        } else {
            other.origin.y.clamp(self.origin.y, self.max_y())
        };
        Position::new(x, y)
    }

    /// Euclidean gap between the nearest cells of two areas (0 when they overlap).
    pub fn distance_to(&self, other: &Area) -> f32 {
        let dx = (other.origin.x - self.max_x())
            .max(self.origin.x - other.max_x())
            .max(0) as f32;
        let dy = (other.origin.y - self.max_y())
            .max(self.origin.y - other.max_y())
            .max(0) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_snaps_to_step() {
        let east = Angle::between((0.5, 0.5), (3.5, 0.5), 32);
        let south = Angle::between((0.5, 0.5), (0.5, 3.5), 32);
        let west = Angle::between((0.5, 0.5), (-2.5, 0.5), 32);
        assert_eq!(east, Some(Angle(0)));
        assert_eq!(south, Some(Angle(64)));
        assert_eq!(west, Some(Angle(128)));

        // 30 degrees snaps to 32 with coarse steps but 24 with precise ones
        let (dx, dy) = (30f32.to_radians().cos(), 30f32.to_radians().sin());
        assert_eq!(Angle::between((0.0, 0.0), (dx, dy), 32), Some(Angle(32)));
        assert_eq!(Angle::between((0.0, 0.0), (dx, dy), 8), Some(Angle(24)));
    }

    #[test]
    fn coincident_points_have_no_angle() {
        assert_eq!(Angle::between((1.0, 1.0), (1.0, 1.0), 8), None);
    }

    #[test]
    fn area_distance_uses_nearest_cells() {
        let a = Footprint::new(2, 2).at(Position::new(0, 0));
        let adjacent = Area::cell(Position::new(2, 1));
        let diagonal = Area::cell(Position::new(2, 2));
        let far = Area::cell(Position::new(5, 1));

        assert_eq!(a.distance_to(&adjacent), 1.0);
        assert!((a.distance_to(&diagonal) - 2f32.sqrt()).abs() < 1e-6);
        assert_eq!(a.distance_to(&far), 4.0);
        assert_eq!(a.distance_to(&Area::cell(Position::new(1, 1))), 0.0);
    }

    #[test]
    fn closest_points_clamp_into_area() {
        let big = Footprint::new(3, 2).at(Position::new(4, 4));
        assert_eq!(big.closest_point_to(Position::new(0, 0)), Position::new(4, 4));
        assert_eq!(big.closest_point_to(Position::new(9, 5)), Position::new(6, 5));

        let other = Area::cell(Position::new(10, 0));
        assert_eq!(big.closest_point_to_area(&other), Position::new(6, 4));
    }
}
