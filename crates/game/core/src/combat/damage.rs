//! Damage typing and raw damage rolls.

use crate::config::DamageRoll;
use crate::env::RngOracle;
use crate::state::UnitStats;

bitflags::bitflags! {
    /// Damage types carried by an attack.
    ///
    /// A weapon may combine several (e.g. a flaming sword is `PHYSICAL | FIRE`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DamageFlags: u8 {
        const PHYSICAL = 1 << 0;
        const FIRE = 1 << 1;
        const WATER = 1 << 2;
        const AIR = 1 << 3;
        const EARTH = 1 << 4;
        const ASTRAL = 1 << 5;
    }
}

impl Default for DamageFlags {
    fn default() -> Self {
        DamageFlags::PHYSICAL
    }
}

/// Roll raw damage within the unit's damage range.
///
/// With [`DamageRoll::HalfOpen`] the result lies in `[damage_min, damage_max)`,
/// with [`DamageRoll::Inclusive`] in `[damage_min, damage_max]`. A degenerate
/// range (`damage_max <= damage_min`) always yields `damage_min`.
pub fn roll_damage(
    stats: &UnitStats,
    mode: DamageRoll,
    rng: &(impl RngOracle + ?Sized),
    seed: u64,
) -> u32 {
    let (min, max) = (stats.damage_min, stats.damage_max);
    match mode {
        DamageRoll::HalfOpen if max > min => rng.range(seed, min, max - 1),
        DamageRoll::Inclusive => rng.range(seed, min, max),
        DamageRoll::HalfOpen => min,
    }
}
