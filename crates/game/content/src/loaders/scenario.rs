//! Scenario loader.
//!
//! A scenario describes the world a simulation starts from: map size, seed,
//! static walls, units and ground loot. Units are written with plain tuples
//! and converted into unit-core types when the world is built.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use unit_core::{
    Angle, EntityId, Footprint, ItemHandle, ItemStack, ItemsPack, MapDimensions, Position, Sack,
    Unit, UnitOrder, UnitStats, World,
};

use crate::loaders::{LoadResult, read_file};

fn single_cell() -> (u32, u32) {
    (1, 1)
}

fn melee_range() -> f32 {
    1.0
}

/// Unit entry in a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub id: u32,
    pub position: (i32, i32),
    #[serde(default = "single_cell")]
    pub footprint: (u32, u32),
    #[serde(default)]
    pub faction: u16,
    #[serde(default)]
    pub angle: u8,
    pub health: i32,
    #[serde(default)]
    pub mana: u32,
    /// Defaults to `mana`.
    #[serde(default)]
    pub max_mana: Option<u32>,
    /// `(min, max)` raw melee damage.
    pub damage: (u32, u32),
    #[serde(default = "melee_range")]
    pub attack_range: f32,
    /// `(item handle, count)` stacks in pack order.
    #[serde(default)]
    pub items: Vec<(u32, u32)>,
    #[serde(default)]
    pub money: u64,
}

impl UnitSpec {
    pub fn build(&self) -> Unit {
        let mut stats = UnitStats::new(self.health, self.mana, self.damage.0, self.damage.1)
            .with_attack_range(self.attack_range);
        stats.max_mana = self.max_mana.unwrap_or(self.mana).max(self.mana);

        Unit::new(
            EntityId(self.id),
            Position::new(self.position.0, self.position.1),
            stats,
        )
        .with_footprint(Footprint::new(self.footprint.0, self.footprint.1))
        .with_angle(Angle(self.angle))
        .with_faction(self.faction)
        .with_pack(ItemsPack::new(stacks(&self.items), self.money))
    }
}

/// Ground loot entry in a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SackSpec {
    pub position: (i32, i32),
    #[serde(default)]
    pub items: Vec<(u32, u32)>,
    #[serde(default)]
    pub money: u64,
}

fn stacks(items: &[(u32, u32)]) -> Vec<ItemStack> {
    items
        .iter()
        .map(|&(handle, count)| ItemStack::new(ItemHandle(handle), count))
        .collect()
}

/// Order issued to a unit once the clock reaches `at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedOrder {
    pub at: u64,
    pub unit: u32,
    pub order: UnitOrder,
}

/// Scenario structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub dimensions: (u32, u32),
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub walls: Vec<(i32, i32)>,
    #[serde(default)]
    pub units: Vec<UnitSpec>,
    #[serde(default)]
    pub sacks: Vec<SackSpec>,
    #[serde(default)]
    pub orders: Vec<ScriptedOrder>,
}

impl Scenario {
    pub fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.dimensions.0, self.dimensions.1)
    }

    pub fn walls(&self) -> BTreeSet<Position> {
        self.walls
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .collect()
    }

    /// Builds the initial world, rejecting units that overlap walls or each
    /// other and any entry outside the map.
    pub fn build_world(&self) -> LoadResult<World> {
        let dimensions = self.dimensions();
        let walls = self.walls();
        if let Some(wall) = walls.iter().find(|wall| !dimensions.contains(**wall)) {
            anyhow::bail!("wall {} is outside the map", wall);
        }

        let mut world = World::new(dimensions, self.seed);
        for spec in &self.units {
            let unit = spec.build();
            let area = unit.area();
            if area.cells().any(|cell| walls.contains(&cell)) {
                anyhow::bail!("unit {} is placed inside a wall", unit.id);
            }
            if area.cells().any(|cell| world.is_occupied(cell, None)) {
                anyhow::bail!("unit {} overlaps another unit", unit.id);
            }
            world
                .spawn_unit(unit)
                .map_err(|e| anyhow::anyhow!("Failed to spawn unit {}: {}", spec.id, e))?;
        }

        for spec in &self.sacks {
            let position = Position::new(spec.position.0, spec.position.1);
            world
                .drop_sack(position, Sack::new(stacks(&spec.items), spec.money))
                .map_err(|e| anyhow::anyhow!("Failed to drop sack: {}", e))?;
        }
        Ok(world)
    }

    /// Scripted orders sorted by issue tick; ties keep file order.
    pub fn timeline(&self) -> Vec<ScriptedOrder> {
        let mut orders = self.orders.clone();
        orders.sort_by_key(|order| order.at);
        orders
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKIRMISH: &str = r#"(
        dimensions: (40, 30),
        seed: 99,
        walls: [(5, 5), (5, 6)],
        units: [
            (id: 1, position: (10, 10), health: 120, mana: 40, damage: (4, 9), items: [(7, 2)], money: 15),
            (id: 2, position: (14, 10), footprint: (2, 2), faction: 1, health: 300, damage: (10, 20), attack_range: 1.5),
        ],
        sacks: [
            (position: (12, 12), items: [(3, 1)], money: 50),
        ],
    )"#;

    #[test]
    fn builds_world_from_scenario() {
        let scenario = ScenarioLoader::parse(SKIRMISH).unwrap();
        let world = scenario.build_world().unwrap();

        assert_eq!(world.seed, 99);
        assert_eq!(world.dimensions(), MapDimensions::new(40, 30));
        assert_eq!(scenario.walls().len(), 2);

        let hero = world.unit(EntityId(1)).unwrap();
        assert_eq!(hero.stats.max_mana, 40);
        assert_eq!(hero.footprint, Footprint::SINGLE);
        assert_eq!(hero.pack.count_of(ItemHandle(7)), 2);
        assert_eq!(hero.pack.money, 15);

        let ogre = world.unit(EntityId(2)).unwrap();
        assert_eq!(ogre.footprint, Footprint::new(2, 2));
        assert_eq!(ogre.faction, 1);
        assert_eq!(ogre.stats.attack_range, 1.5);

        let sack = world.sack_at(Position::new(12, 12)).unwrap();
        assert_eq!(sack.money, 50);
    }

    #[test]
    fn scripted_orders_are_sorted_by_tick() {
        let scenario = ScenarioLoader::parse(
            r#"(
                dimensions: (20, 20),
                orders: [
                    (at: 5, unit: 1, order: attack(EntityId(2))),
                    (at: 0, unit: 1, order: move_to((x: 4, y: 4))),
                    (at: 5, unit: 2, order: stop),
                ],
            )"#,
        )
        .unwrap();

        let timeline = scenario.timeline();
        assert_eq!(timeline.iter().map(|o| o.at).collect::<Vec<_>>(), vec![0, 5, 5]);
        assert_eq!(timeline[0].order, UnitOrder::MoveTo(Position::new(4, 4)));
        assert_eq!(timeline[1].order, UnitOrder::Attack(EntityId(2)));
        assert_eq!(timeline[2].order, UnitOrder::Stop);
    }

    #[test]
    fn unit_inside_wall_is_rejected() {
        let scenario = ScenarioLoader::parse(
            "(dimensions: (20, 20), walls: [(3, 3)], units: [(id: 1, position: (3, 3), health: 10, damage: (1, 2))])",
        )
        .unwrap();
        let err = scenario.build_world().unwrap_err();
        assert!(err.to_string().contains("inside a wall"));
    }

    #[test]
    fn overlapping_units_are_rejected() {
        let scenario = ScenarioLoader::parse(
            r#"(
                dimensions: (20, 20),
                units: [
                    (id: 1, position: (3, 3), footprint: (2, 2), health: 10, damage: (1, 2)),
                    (id: 2, position: (4, 4), health: 10, damage: (1, 2)),
                ],
            )"#,
        )
        .unwrap();
        assert!(scenario.build_world().is_err());
    }

    #[test]
    fn sack_outside_map_is_rejected() {
        let scenario =
            ScenarioLoader::parse("(dimensions: (8, 8), sacks: [(position: (9, 1), money: 1)])")
                .unwrap();
        assert!(scenario.build_world().is_err());
    }
}
