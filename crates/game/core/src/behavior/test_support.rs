//! Deterministic collaborators and a world fixture for state tests.
use std::collections::BTreeSet;

use crate::action::Action;
use crate::behavior::{EvalContext, StateStatus, UnitState, try_walk_to};
use crate::config::GameConfig;
use crate::env::{CombatRules, GameEnv, NavigationOracle, RngOracle, WalkGoal};
use crate::notify::{Notification, Role};
use crate::state::{EntityId, MapDimensions, Position, Unit, UnitStats, World};

/// Steps straight (8 directions) toward the goal, blocked by walls and other units.
#[derive(Default)]
pub struct Greedy {
    pub walls: BTreeSet<Position>,
}

impl NavigationOracle for Greedy {
    fn next_step(
        &self,
        _world: &World,
        unit: &Unit,
        goal: WalkGoal,
        stand_off: f32,
    ) -> Option<Position> {
        let goal = goal.area();
        if unit.area().distance_to(&goal) <= stand_off {
            return None;
        }
        let target = goal.closest_point_to(unit.position);
        let dx = (target.x - unit.position.x).signum();
        let dy = (target.y - unit.position.y).signum();
        Some(Position::new(unit.position.x + dx, unit.position.y + dy))
    }

    fn is_walkable_for(
        &self,
        world: &World,
        unit: &Unit,
        cell: Position,
        exclude_self: bool,
    ) -> bool {
        let area = unit.area_at(cell);
        let exclude = exclude_self.then_some(unit.id);
        world.dimensions().contains_area(&area)
            && area
                .cells()
                .all(|c| !self.walls.contains(&c) && !world.is_occupied(c, exclude))
    }
}

/// Never finds a path.
pub struct NoPath;

impl NavigationOracle for NoPath {
    fn next_step(&self, _: &World, _: &Unit, _: WalkGoal, _: f32) -> Option<Position> {
        None
    }

    fn is_walkable_for(&self, _: &World, _: &Unit, _: Position, _: bool) -> bool {
        true
    }
}

/// Finds a step east that is never walkable.
pub struct StepIntoWall;

impl NavigationOracle for StepIntoWall {
    fn next_step(&self, _: &World, unit: &Unit, _: WalkGoal, _: f32) -> Option<Position> {
        Some(Position::new(unit.position.x + 1, unit.position.y))
    }

    fn is_walkable_for(&self, _: &World, _: &Unit, _: Position, _: bool) -> bool {
        false
    }
}

pub struct AllowAll;

impl CombatRules for AllowAll {
    fn can_attack(&self, _: &Unit, _: &Unit) -> bool {
        true
    }
}

pub struct DenyAll;

impl CombatRules for DenyAll {
    fn can_attack(&self, _: &Unit, _: &Unit) -> bool {
        false
    }
}

/// Returns the same raw value for every seed.
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// A 64x64 world plus boxed collaborators.
pub struct Fixture {
    pub world: World,
    pub config: GameConfig,
    pub navigation: Box<dyn NavigationOracle>,
    pub rules: Box<dyn CombatRules>,
    pub rng: Box<dyn RngOracle>,
    pub notifications: Vec<Notification>,
    pub role: Role,
    next_id: u32,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_navigation(Greedy::default())
    }

    pub fn with_navigation(navigation: impl NavigationOracle + 'static) -> Self {
        Self {
            world: World::new(MapDimensions::new(64, 64), 7),
            config: GameConfig::default(),
            navigation: Box::new(navigation),
            rules: Box::new(AllowAll),
            rng: Box::new(FixedRng(0)),
            notifications: Vec::new(),
            role: Role::Authoritative,
            next_id: 1,
        }
    }

    pub fn rules(mut self, rules: impl CombatRules + 'static) -> Self {
        self.rules = Box::new(rules);
        self
    }

    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Spawns a 1x1 unit with default stats.
    pub fn spawn_at(&mut self, position: Position) -> EntityId {
        self.spawn_with(position, |unit| unit)
    }

    /// Spawns a unit after letting `build` customize it.
    pub fn spawn_with(&mut self, position: Position, build: impl FnOnce(Unit) -> Unit) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let unit = build(Unit::new(id, position, UnitStats::default()));
        self.world.spawn_unit(unit).unwrap()
    }

    pub fn unit(&self, id: EntityId) -> &Unit {
        self.world.unit(id).unwrap()
    }

    pub fn unit_mut(&mut self, id: EntityId) -> &mut Unit {
        self.world.unit_mut(id).unwrap()
    }

    pub fn actions(&self, id: EntityId) -> Vec<Action> {
        self.unit(id).actions.iter().copied().collect()
    }

    pub fn walk(&mut self, id: EntityId, goal: WalkGoal, stand_off: f32) -> bool {
        let navigation: &dyn NavigationOracle = self.navigation.as_ref();
        let rules: &dyn CombatRules = self.rules.as_ref();
        let rng: &dyn RngOracle = self.rng.as_ref();
        let env: GameEnv<'_> = GameEnv::new(navigation, rules, rng, &self.config);
        try_walk_to(&mut self.world, id, goal, stand_off, &env)
    }

    pub fn evaluate(&mut self, state: &mut UnitState, id: EntityId) -> StateStatus {
        let navigation: &dyn NavigationOracle = self.navigation.as_ref();
        let rules: &dyn CombatRules = self.rules.as_ref();
        let rng: &dyn RngOracle = self.rng.as_ref();
        let env: GameEnv<'_> = GameEnv::new(navigation, rules, rng, &self.config);
        let mut ctx = EvalContext::new(env, &mut self.notifications, self.role);
        state.evaluate(&mut self.world, id, &mut ctx)
    }

    /// Plays the unit's queued moves and turns, drops everything else, and
    /// advances the clock.
    pub fn play(&mut self, id: EntityId) {
        let unit = self.unit_mut(id);
        for action in unit.actions.drain() {
            match action {
                Action::Move(step) => unit.position = step.destination,
                Action::Rotate(turn) => unit.angle = turn.angle,
                Action::Attack(_) => {}
            }
        }
        self.world.advance_tick();
    }
}
