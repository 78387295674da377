use crate::action::{AttackAction, RotateAction};
use crate::behavior::{EvalContext, StateStatus, try_walk_to};
use crate::config::GameConfig;
use crate::env::{Spell, WalkGoal};
use crate::notify::Notification;
use crate::state::{EntityId, Position, World};

/// Approach a unit or a cell and release a spell at it once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastState {
    pub spell: Spell,
    pub target_unit: Option<EntityId>,
    pub target_cell: Option<Position>,
    /// Set once the spell has been released.
    pub executed: bool,
}

/// What the caster does this tick, decided from an immutable look at the world.
enum Plan {
    Approach(WalkGoal),
    Turn(RotateAction),
    Release,
}

impl CastState {
    pub fn at_unit(spell: Spell, target: EntityId) -> Self {
        Self {
            spell,
            target_unit: Some(target),
            target_cell: None,
            executed: false,
        }
    }

    pub fn at_cell(spell: Spell, cell: Position) -> Self {
        Self {
            spell,
            target_unit: None,
            target_cell: Some(cell),
            executed: false,
        }
    }

    /// One tick of casting.
    ///
    /// A target cell too close to the map edge is dropped when a target unit
    /// exists; a pure point cast finishes instead. The spell is released at
    /// most once: any evaluation after the release finishes without side
    /// effects.
    pub fn evaluate(
        &mut self,
        world: &mut World,
        unit: EntityId,
        ctx: &mut EvalContext<'_>,
    ) -> StateStatus {
        let margin = ctx.config().map_border_margin;
        let cell_in_bounds = self
            .target_cell
            .is_some_and(|cell| world.dimensions().contains_with_margin(cell, margin));
        if !cell_in_bounds {
            if self.target_unit.is_none() {
                return StateStatus::Finished;
            }
            self.target_cell = None;
        }

        let Some(plan) = self.plan(world, unit, ctx) else {
            return StateStatus::Finished;
        };

        match plan {
            Plan::Approach(goal) => {
                try_walk_to(world, unit, goal, self.spell.range, &ctx.env);
            }
            Plan::Turn(turn) => {
                if let Some(caster) = world.unit_mut(unit) {
                    caster.actions.push(turn);
                }
            }
            Plan::Release => return self.release(world, unit, ctx),
        }
        StateStatus::Running
    }

    /// `None` finishes the state.
    fn plan(&self, world: &World, unit: EntityId, ctx: &EvalContext<'_>) -> Option<Plan> {
        let caster = world.unit(unit)?;
        if self.executed {
            return None;
        }
        if caster.is_dead() {
            return None;
        }
        if self.spell.is_attack && self.target_unit == Some(unit) {
            return None;
        }

        let target = match self.target_unit {
            Some(id) => {
                let target = world.unit(id).filter(|target| target.is_targetable())?;
                if !ctx.env.rules().can_attack(caster, target) {
                    return None;
                }
                Some(target)
            }
            None => None,
        };
        let reach = self.spell.range + GameConfig::ENGAGEMENT_MARGIN;
        let (aim, goal, in_reach) = match (target, self.target_cell) {
            (Some(target), _) => (
                target.closest_point_to_unit(caster),
                WalkGoal::Area(target.area()),
                caster.closest_distance_to(target) <= reach,
            ),
            (None, Some(cell)) => (
                cell,
                WalkGoal::Cell(cell),
                caster.closest_point_to(cell).distance_to(cell) <= reach,
            ),
            (None, None) => return None,
        };
        if !in_reach {
            return Some(Plan::Approach(goal));
        }

        if self.target_unit != Some(unit) {
            let facing = caster.face_cell_precise(aim);
            if caster.angle != facing {
                return Some(Plan::Turn(RotateAction::new(unit, facing)));
            }
        }
        Some(Plan::Release)
    }

    fn release(
        &mut self,
        world: &mut World,
        unit: EntityId,
        ctx: &mut EvalContext<'_>,
    ) -> StateStatus {
        let Some(caster) = world.unit_mut(unit) else {
            return StateStatus::Finished;
        };
        let spell = &self.spell;
        let affordable = spell.is_item_bound() || caster.stats.mana >= spell.mana_cost;
        let has_item = !spell.item_disposable
            || spell.item.is_some_and(|item| caster.pack.contains(item));
        if !affordable || !has_item {
            return StateStatus::Finished;
        }

        caster.actions.push(AttackAction::spell(
            unit,
            spell.id,
            self.target_unit,
            self.target_cell,
        ));

        let mut synced = Vec::new();
        if !spell.is_item_bound() {
            let remaining = caster.stats.mana - spell.mana_cost;
            if caster.stats.try_set_mana(remaining) {
                synced.push(Notification::StatsSync { unit });
            }
        } else if spell.item_disposable {
            if let Some(item) = spell.item {
                if caster.pack.take(item, 1).is_some() {
                    synced.push(Notification::PackSync { unit });
                }
            }
        }
        caster.needs_view_refresh = true;
        caster.needs_info_refresh = true;

        for notification in synced {
            ctx.sync(notification);
        }
        self.executed = true;
        StateStatus::Running
    }
}
