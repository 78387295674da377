use crate::action::{AttackAction, RotateAction};
use crate::behavior::{EvalContext, StateStatus, try_walk_to};
use crate::combat::roll_damage;
use crate::config::GameConfig;
use crate::env::{ROLL_MELEE_DAMAGE, WalkGoal, compute_seed};
use crate::state::{EntityId, World};

/// Melee a target unit, approaching it first if needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackState {
    pub target: EntityId,
}

/// What the attacker does this tick, decided from an immutable look at the world.
enum Engagement {
    Turn(RotateAction),
    Strike(AttackAction),
    Approach(WalkGoal, f32),
}

impl AttackState {
    pub fn new(target: EntityId) -> Self {
        Self { target }
    }

    /// Finishes when the attacker is dead, the target is itself, or the
    /// target is gone, dead, unlinked or protected by combat rules.
    ///
    /// In reach (attack range plus [`GameConfig::ENGAGEMENT_MARGIN`]) the
    /// attacker first turns to face the target's nearest cell and swings on a
    /// later tick; otherwise it walks until within attack range. A blocked
    /// walk is ignored and retried next tick.
    pub fn evaluate(
        &mut self,
        world: &mut World,
        unit: EntityId,
        ctx: &mut EvalContext<'_>,
    ) -> StateStatus {
        let Some(engagement) = self.engage(world, unit, ctx) else {
            return StateStatus::Finished;
        };

        match engagement {
            Engagement::Approach(goal, range) => {
                try_walk_to(world, unit, goal, range, &ctx.env);
            }
            Engagement::Turn(turn) => {
                if let Some(attacker) = world.unit_mut(unit) {
                    attacker.actions.push(turn);
                }
            }
            Engagement::Strike(swing) => {
                if let Some(attacker) = world.unit_mut(unit) {
                    attacker.actions.push(swing);
                }
            }
        }
        StateStatus::Running
    }

    fn engage(&self, world: &World, unit: EntityId, ctx: &EvalContext<'_>) -> Option<Engagement> {
        let attacker = world.unit(unit).filter(|attacker| !attacker.is_dead())?;
        if self.target == unit {
            return None;
        }
        let target = world
            .unit(self.target)
            .filter(|target| target.is_targetable())?;
        if !ctx.env.rules().can_attack(attacker, target) {
            return None;
        }

        let range = attacker.stats.attack_range;
        if attacker.closest_distance_to(target) > range + GameConfig::ENGAGEMENT_MARGIN {
            return Some(Engagement::Approach(WalkGoal::Area(target.area()), range));
        }

        let facing = attacker.face_cell_precise(target.closest_point_to_unit(attacker));
        if attacker.angle != facing {
            return Some(Engagement::Turn(RotateAction::new(unit, facing)));
        }

        let seed = compute_seed(world.seed, world.tick().0, unit.0, ROLL_MELEE_DAMAGE);
        let damage = roll_damage(
            &attacker.stats,
            ctx.config().damage_roll,
            ctx.env.rng(),
            seed,
        );
        Some(Engagement::Strike(AttackAction::melee(
            unit,
            self.target,
            attacker.damage_flags,
            damage,
        )))
    }
}
