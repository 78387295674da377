//! Authoritative world state.
//!
//! This module owns the unit arena, the ground loot table and the simulation
//! clock. Per-tick state evaluation mutates units through [`World::unit_mut`];
//! everything else is read-only queries.
mod error;
pub mod types;

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

pub use error::WorldError;
pub use types::{
    Angle, Area, EntityId, Footprint, ItemHandle, ItemStack, ItemsPack, Position, Sack, Tick,
    Unit, UnitStats,
};

/// Width and height of the map in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// True if `position` lies at least `margin` cells away from every map edge.
    pub fn contains_with_margin(&self, position: Position, margin: i32) -> bool {
        position.x >= margin
            && position.y >= margin
            && position.x < self.width as i32 - margin
            && position.y < self.height as i32 - margin
    }

    pub fn contains_area(&self, area: &Area) -> bool {
        area.cells().all(|cell| self.contains(cell))
    }
}

/// Canonical snapshot of the simulated world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    /// Base RNG seed, fixed at creation. Combined with the tick and unit id
    /// to derive every random roll.
    pub seed: u64,
    tick: Tick,
    dimensions: MapDimensions,
    units: BTreeMap<EntityId, Unit>,
    sacks: BTreeMap<Position, Sack>,
}

impl World {
    pub fn new(dimensions: MapDimensions, seed: u64) -> Self {
        Self {
            seed,
            tick: Tick::ZERO,
            dimensions,
            units: BTreeMap::new(),
            sacks: BTreeMap::new(),
        }
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Moves the clock forward by one tick and returns the new value.
    pub fn advance_tick(&mut self) -> Tick {
        self.tick = self.tick + 1;
        self.tick
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn unit(&self, id: EntityId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub fn unit_mut(&mut self, id: EntityId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    /// Units in ascending id order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn unit_ids(&self) -> Vec<EntityId> {
        self.units.keys().copied().collect()
    }

    /// Links a unit into the world.
    ///
    /// # Errors
    ///
    /// Fails if the id is taken or the footprint leaves the map.
    pub fn spawn_unit(&mut self, mut unit: Unit) -> Result<EntityId, WorldError> {
        if self.units.contains_key(&unit.id) {
            return Err(WorldError::DuplicateUnit(unit.id));
        }
        if !self.dimensions.contains_area(&unit.area()) {
            return Err(WorldError::PositionOutOfBounds {
                position: unit.position,
                width: self.dimensions.width,
                height: self.dimensions.height,
            });
        }

        unit.linked = true;
        let id = unit.id;
        self.units.insert(id, unit);
        Ok(id)
    }

    /// Unlinks a unit from the world, returning it.
    pub fn despawn_unit(&mut self, id: EntityId) -> Result<Unit, WorldError> {
        let mut unit = self.units.remove(&id).ok_or(WorldError::UnitNotFound(id))?;
        unit.linked = false;
        Ok(unit)
    }

    pub fn sack_at(&self, position: Position) -> Option<&Sack> {
        self.sacks.get(&position)
    }

    /// Drops loot at `position`, merging into an existing sack.
    pub fn drop_sack(&mut self, position: Position, sack: Sack) -> Result<(), WorldError> {
        if !self.dimensions.contains(position) {
            return Err(WorldError::PositionOutOfBounds {
                position,
                width: self.dimensions.width,
                height: self.dimensions.height,
            });
        }

        let slot = self.sacks.entry(position).or_default();
        slot.stacks.extend(sack.stacks);
        slot.money = slot.money.saturating_add(sack.money);
        Ok(())
    }

    pub fn remove_sack_at(&mut self, position: Position) -> Option<Sack> {
        self.sacks.remove(&position)
    }

    /// Moves the whole sack at `cell` into `unit`'s pack and returns it.
    ///
    /// Stacks are appended without merging and money is added. Nothing changes
    /// unless both the unit and the sack exist.
    pub fn transfer_sack(&mut self, unit: EntityId, cell: Position) -> Option<Sack> {
        if !self.units.contains_key(&unit) {
            return None;
        }
        let sack = self.remove_sack_at(cell)?;
        if let Some(receiver) = self.units.get_mut(&unit) {
            for stack in &sack.stacks {
                receiver.pack.push_back(*stack);
            }
            receiver.pack.money = receiver.pack.money.saturating_add(sack.money);
        }
        Some(sack)
    }

    /// True if any linked unit other than `exclude` covers `cell`.
    pub fn is_occupied(&self, cell: Position, exclude: Option<EntityId>) -> bool {
        self.units
            .values()
            .filter(|unit| Some(unit.id) != exclude && unit.linked && unit.alive)
            .any(|unit| unit.area().contains(cell))
    }

    /// SHA-256 digest over the deterministic parts of the world.
    ///
    /// Two simulations fed the same orders produce the same digest every tick.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.seed.to_le_bytes());
        hasher.update(self.tick.0.to_le_bytes());
        for unit in self.units.values() {
            hasher.update(unit.id.0.to_le_bytes());
            hasher.update(unit.position.x.to_le_bytes());
            hasher.update(unit.position.y.to_le_bytes());
            hasher.update([unit.angle.0, unit.alive as u8, unit.linked as u8]);
            hasher.update(unit.stats.health.to_le_bytes());
            hasher.update(unit.stats.mana.to_le_bytes());
            hasher.update(unit.pack.money.to_le_bytes());
            for stack in unit.pack.stacks() {
                hasher.update(stack.handle.0.to_le_bytes());
                hasher.update(stack.count.to_le_bytes());
            }
            hasher.update((unit.actions.len() as u64).to_le_bytes());
        }
        for (position, sack) in &self.sacks {
            hasher.update(position.x.to_le_bytes());
            hasher.update(position.y.to_le_bytes());
            hasher.update(sack.money.to_le_bytes());
            hasher.update((sack.stacks.len() as u64).to_le_bytes());
        }
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(MapDimensions::new(32, 32), 7)
    }

    #[test]
    fn spawn_rejects_duplicates_and_out_of_bounds() {
        let mut world = world();
        let unit = Unit::new(EntityId(1), Position::new(2, 2), UnitStats::default());
        world.spawn_unit(unit.clone()).unwrap();

        assert_eq!(
            world.spawn_unit(unit),
            Err(WorldError::DuplicateUnit(EntityId(1)))
        );

        let giant = Unit::new(EntityId(2), Position::new(31, 31), UnitStats::default())
            .with_footprint(Footprint::new(2, 2));
        assert!(matches!(
            world.spawn_unit(giant),
            Err(WorldError::PositionOutOfBounds { .. })
        ));
    }

    #[test]
    fn margin_check_excludes_border() {
        let dims = MapDimensions::new(32, 32);
        assert!(!dims.contains_with_margin(Position::new(7, 10), 8));
        assert!(dims.contains_with_margin(Position::new(8, 8), 8));
        assert!(dims.contains_with_margin(Position::new(23, 23), 8));
        assert!(!dims.contains_with_margin(Position::new(24, 10), 8));
    }

    #[test]
    fn dropped_sacks_merge() {
        let mut world = world();
        let cell = Position::new(4, 4);
        world
            .drop_sack(cell, Sack::new(vec![ItemStack::new(ItemHandle(1), 2)], 5))
            .unwrap();
        world.drop_sack(cell, Sack::new(vec![], 10)).unwrap();

        let sack = world.sack_at(cell).unwrap();
        assert_eq!(sack.money, 15);
        assert_eq!(sack.stacks.len(), 1);
    }

    #[test]
    fn money_saturates_instead_of_overflowing() {
        let mut world = world();
        let cell = Position::new(4, 4);
        world.drop_sack(cell, Sack::new(vec![], u64::MAX - 1)).unwrap();
        world.drop_sack(cell, Sack::new(vec![], 5)).unwrap();
        assert_eq!(world.sack_at(cell).unwrap().money, u64::MAX);

        let rich = Unit::new(EntityId(1), cell, UnitStats::default())
            .with_pack(ItemsPack::new(vec![], 10));
        world.spawn_unit(rich).unwrap();
        let sack = world.transfer_sack(EntityId(1), cell).unwrap();
        assert_eq!(sack.money, u64::MAX);
        assert_eq!(world.unit(EntityId(1)).unwrap().pack.money, u64::MAX);
        assert!(world.sack_at(cell).is_none());
    }

    #[test]
    fn transfer_without_receiver_keeps_the_sack() {
        let mut world = world();
        let cell = Position::new(4, 4);
        world.drop_sack(cell, Sack::new(vec![], 3)).unwrap();

        assert_eq!(world.transfer_sack(EntityId(9), cell), None);
        assert_eq!(world.sack_at(cell).unwrap().money, 3);
    }

    #[test]
    fn digest_tracks_state_changes() {
        let mut a = world();
        let b = world();
        assert_eq!(a.digest(), b.digest());

        a.advance_tick();
        assert_ne!(a.digest(), b.digest());
        assert_eq!(hex::encode(a.digest()).len(), 64);
    }
}
