//! Faction-based attack eligibility served through [`unit_core::CombatRules`].
use std::collections::BTreeSet;

use unit_core::{CombatRules, Unit};

/// Units of different factions are hostile unless their factions are allied.
///
/// A unit may always target itself, which lets self-cast spells through.
#[derive(Clone, Debug, Default)]
pub struct FactionRules {
    alliances: BTreeSet<(u16, u16)>,
}

impl FactionRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alliance(mut self, a: u16, b: u16) -> Self {
        self.alliances.insert((a.min(b), a.max(b)));
        self
    }

    pub fn are_allied(&self, a: u16, b: u16) -> bool {
        a == b || self.alliances.contains(&(a.min(b), a.max(b)))
    }
}

impl CombatRules for FactionRules {
    fn can_attack(&self, attacker: &Unit, target: &Unit) -> bool {
        attacker.id == target.id || !self.are_allied(attacker.faction, target.faction)
    }
}
