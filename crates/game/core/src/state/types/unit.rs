//! Unit state: position, stats, inventory and pending intents.

use crate::action::ActionQueue;
use crate::combat::DamageFlags;
use crate::state::types::{Angle, Area, EntityId, Footprint, ItemsPack, Position};

/// Angle step used when turning toward the next path cell (8 directions).
const STEP_FACING: u32 = 32;

/// Angle step used when aiming at a target (32 directions).
const AIM_FACING: u32 = 8;

/// Combat and resource stats of a unit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    /// Current health. Zero or below means the unit is dead.
    pub health: i32,
    pub max_health: i32,
    pub mana: u32,
    pub max_mana: u32,
    pub damage_min: u32,
    pub damage_max: u32,
    /// Melee reach in cells.
    pub attack_range: f32,
}

impl UnitStats {
    pub fn new(health: i32, mana: u32, damage_min: u32, damage_max: u32) -> Self {
        Self {
            health,
            max_health: health,
            mana,
            max_mana: mana,
            damage_min,
            damage_max,
            attack_range: 1.0,
        }
    }

    pub fn with_attack_range(mut self, attack_range: f32) -> Self {
        self.attack_range = attack_range;
        self
    }

    /// Sets mana if the value fits in `0..=max_mana`.
    pub fn try_set_mana(&mut self, mana: u32) -> bool {
        if mana > self.max_mana {
            return false;
        }
        self.mana = mana;
        true
    }
}

impl Default for UnitStats {
    fn default() -> Self {
        Self::new(100, 0, 1, 2)
    }
}

/// A controllable unit living in the world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: EntityId,
    /// Top-left cell of the footprint.
    pub position: Position,
    pub footprint: Footprint,
    pub angle: Angle,
    pub stats: UnitStats,
    /// Faction used by combat rules to decide who may attack whom.
    pub faction: u16,
    /// Innate or equipped damage type applied to melee attacks.
    pub damage_flags: DamageFlags,
    pub actions: ActionQueue,
    pub pack: ItemsPack,
    /// Liveness flag maintained by the world (cleared on death).
    pub alive: bool,
    /// Whether the unit is currently linked into the world.
    pub linked: bool,
    pub needs_view_refresh: bool,
    pub needs_info_refresh: bool,
}

impl Unit {
    pub fn new(id: EntityId, position: Position, stats: UnitStats) -> Self {
        Self {
            id,
            position,
            footprint: Footprint::SINGLE,
            angle: Angle::default(),
            stats,
            faction: 0,
            damage_flags: DamageFlags::PHYSICAL,
            actions: ActionQueue::new(),
            pack: ItemsPack::empty(),
            alive: true,
            linked: true,
            needs_view_refresh: false,
            needs_info_refresh: false,
        }
    }

    pub fn with_footprint(mut self, footprint: Footprint) -> Self {
        self.footprint = footprint;
        self
    }

    pub fn with_angle(mut self, angle: Angle) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_faction(mut self, faction: u16) -> Self {
        self.faction = faction;
        self
    }

    pub fn with_pack(mut self, pack: ItemsPack) -> Self {
        self.pack = pack;
        self
    }

    pub fn with_damage_flags(mut self, damage_flags: DamageFlags) -> Self {
        self.damage_flags = damage_flags;
        self
    }

    /// Cells currently occupied by this unit.
    pub fn area(&self) -> Area {
        self.footprint.at(self.position)
    }

    /// Cells this unit would occupy standing at `position`.
    pub fn area_at(&self, position: Position) -> Area {
        self.footprint.at(position)
    }

    /// Health has dropped to zero or below.
    pub fn is_dead(&self) -> bool {
        self.stats.health <= 0
    }

    /// Alive and still part of the world; valid as a target.
    pub fn is_targetable(&self) -> bool {
        self.alive && self.linked && !self.is_dead()
    }

    /// Shortest gap between this unit's footprint and `other`'s.
    pub fn closest_distance_to(&self, other: &Unit) -> f32 {
        self.area().distance_to(&other.area())
    }

    /// Own cell nearest to `other`'s footprint.
    pub fn closest_point_to_unit(&self, other: &Unit) -> Position {
        self.area().closest_point_to_area(&other.area())
    }

    /// Own cell nearest to `cell`.
    pub fn closest_point_to(&self, cell: Position) -> Position {
        self.area().closest_point_to(cell)
    }

    /// Coarse facing needed to move the footprint onto `step`.
    ///
    /// Keeps the current facing when `step` is the current position.
    pub fn face_cell(&self, step: Position) -> Angle {
        Angle::between(self.area().center(), self.area_at(step).center(), STEP_FACING)
            .unwrap_or(self.angle)
    }

    /// Precise facing needed to aim at `cell`.
    pub fn face_cell_precise(&self, cell: Position) -> Angle {
        let target = (cell.x as f32 + 0.5, cell.y as f32 + 0.5);
        Angle::between(self.area().center(), target, AIM_FACING).unwrap_or(self.angle)
    }
}
