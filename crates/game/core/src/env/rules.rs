use crate::state::Unit;

/// Attack eligibility rules (factions, diplomacy, invulnerability).
pub trait CombatRules: Send + Sync {
    fn can_attack(&self, attacker: &Unit, target: &Unit) -> bool;
}
