//! Playback of queued intents.
//!
//! Unit states only queue [`Action`]s. After every tick the applier drains
//! each queue in unit-id order and resolves the intents against the world:
//! moves relocate the unit when the destination is still walkable, rotations
//! set the facing, melee swings subtract health and spell releases are
//! reported as events.

use unit_core::{
    Action, AttackAction, AttackStyle, EntityId, NavigationOracle, Tick, World,
};

use crate::events::StateEvent;

/// Resolves drained intents. Stateless; the navigator is only consulted for
/// walkability.
pub struct IntentApplier<'a> {
    navigation: &'a dyn NavigationOracle,
}

impl<'a> IntentApplier<'a> {
    pub fn new(navigation: &'a dyn NavigationOracle) -> Self {
        Self { navigation }
    }

    /// Drains every queue and returns the resulting events in order.
    ///
    /// Intents of units that died earlier in the same pass are discarded.
    pub fn apply(&self, world: &mut World, tick: Tick) -> Vec<StateEvent> {
        let mut events = Vec::new();
        for id in world.unit_ids() {
            let Some(unit) = world.unit_mut(id) else {
                continue;
            };
            let intents = unit.actions.drain();
            if unit.is_dead() {
                continue;
            }
            for intent in intents {
                if world.unit(id).is_none_or(|unit| unit.is_dead()) {
                    break;
                }
                self.apply_one(world, intent, tick, &mut events);
            }
        }
        events
    }

    fn apply_one(&self, world: &mut World, intent: Action, tick: Tick, events: &mut Vec<StateEvent>) {
        match intent {
            Action::Move(step) => {
                let walkable = world.unit(step.actor).is_some_and(|unit| {
                    self.navigation
                        .is_walkable_for(world, unit, step.destination, true)
                });
                if !walkable {
                    tracing::debug!(unit = %step.actor, cell = %step.destination, "move intent blocked");
                    return;
                }
                if let Some(unit) = world.unit_mut(step.actor) {
                    unit.position = step.destination;
                }
            }
            Action::Rotate(rotate) => {
                if let Some(unit) = world.unit_mut(rotate.actor) {
                    unit.angle = rotate.angle;
                }
            }
            Action::Attack(attack) => self.apply_attack(world, attack, tick, events),
        }
    }

    fn apply_attack(
        &self,
        world: &mut World,
        attack: AttackAction,
        tick: Tick,
        events: &mut Vec<StateEvent>,
    ) {
        match attack.style {
            AttackStyle::Melee { damage, .. } => {
                let Some(target) = attack.target else {
                    return;
                };
                if strike(world, target, damage) {
                    events.push(StateEvent::MeleeHit {
                        attacker: attack.actor,
                        target,
                        damage,
                        tick,
                    });
                    if world.unit(target).is_some_and(|unit| unit.is_dead()) {
                        tracing::info!(unit = %target, killer = %attack.actor, "unit died");
                        events.push(StateEvent::UnitDied {
                            unit: target,
                            killer: Some(attack.actor),
                            tick,
                        });
                    }
                }
            }
            AttackStyle::Spell { spell, target_cell } => {
                events.push(StateEvent::SpellCast {
                    caster: attack.actor,
                    spell,
                    target: attack.target,
                    target_cell,
                    tick,
                });
            }
        }
    }
}

/// Subtracts `damage` from a living target. Returns false if nothing was hit.
fn strike(world: &mut World, target: EntityId, damage: u32) -> bool {
    let Some(unit) = world.unit_mut(target) else {
        return false;
    };
    if unit.is_dead() {
        return false;
    }
    let damage = i32::try_from(damage).unwrap_or(i32::MAX);
    unit.stats.health = unit.stats.health.saturating_sub(damage);
    if unit.stats.health <= 0 {
        unit.alive = false;
    }
    true
}
