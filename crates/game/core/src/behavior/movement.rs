use crate::behavior::{EvalContext, StateStatus, try_walk_to};
use crate::env::WalkGoal;
use crate::state::{EntityId, Position, Tick, World};

/// Record of the most recent successful and failed walk attempts.
///
/// `last_good` starts at the tick the state was created so a unit that never
/// manages a single step still gives up once the backoff window elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathLedger {
    pub last_good: Tick,
    pub last_bad: Tick,
}

impl PathLedger {
    pub fn new(created: Tick) -> Self {
        Self {
            last_good: created,
            last_bad: Tick::ZERO,
        }
    }

    pub fn record(&mut self, now: Tick, walked: bool) {
        if walked {
            self.last_good = now;
        } else {
            self.last_bad = now;
        }
    }

    /// True once no step succeeded for longer than `window` ticks and the
    /// latest attempt failed.
    pub fn gave_up(&self, now: Tick, window: u64) -> bool {
        now.since(self.last_good) > window && self.last_bad > self.last_good
    }
}

/// Walk to an exact cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveState {
    pub destination: Position,
    pub ledger: PathLedger,
}

impl MoveState {
    pub fn new(destination: Position, now: Tick) -> Self {
        Self {
            destination,
            ledger: PathLedger::new(now),
        }
    }

    pub fn evaluate(
        &mut self,
        world: &mut World,
        unit: EntityId,
        ctx: &mut EvalContext<'_>,
    ) -> StateStatus {
        let now = world.tick();
        let Some(walker) = world.unit(unit) else {
            return StateStatus::Finished;
        };
        if walker.is_dead() || walker.position == self.destination {
            return StateStatus::Finished;
        }
        if self.ledger.gave_up(now, ctx.config().path_backoff_ticks()) {
            return StateStatus::Finished;
        }

        let walked = try_walk_to(world, unit, WalkGoal::Cell(self.destination), 0.0, &ctx.env);
        self.ledger.record(now, walked);
        StateStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::UnitState;
    use crate::behavior::test_support::{Fixture, NoPath};

    fn move_to(destination: Position, now: Tick) -> UnitState {
        UnitState::Move(MoveState::new(destination, now))
    }

    #[test]
    fn reaches_destination_then_finishes() {
        let mut fx = Fixture::new();
        let id = fx.spawn_at(Position::new(10, 10));
        let destination = Position::new(13, 10);
        let mut state = move_to(destination, fx.world.tick());

        for _ in 0..3 {
            assert_eq!(fx.evaluate(&mut state, id), StateStatus::Running);
            fx.play(id);
        }
        assert_eq!(fx.unit(id).position, destination);
        assert_eq!(fx.evaluate(&mut state, id), StateStatus::Finished);
        assert!(fx.actions(id).is_empty());
    }

    #[test]
    fn already_there_finishes_immediately() {
        let mut fx = Fixture::new();
        let id = fx.spawn_at(Position::new(10, 10));
        let mut state = move_to(Position::new(10, 10), fx.world.tick());

        assert_eq!(fx.evaluate(&mut state, id), StateStatus::Finished);
        assert!(fx.actions(id).is_empty());
    }

    #[test]
    fn gives_up_after_backoff_window() {
        let mut fx = Fixture::with_navigation(NoPath);
        let id = fx.spawn_at(Position::new(10, 10));
        let mut state = move_to(Position::new(20, 10), fx.world.tick());
        let window = fx.config.path_backoff_ticks();
        assert_eq!(window, 100);

        // ticks 0..=window keep retrying
        for _ in 0..=window {
            assert_eq!(fx.evaluate(&mut state, id), StateStatus::Running);
            fx.play(id);
        }
        assert_eq!(fx.world.tick(), Tick(window + 1));
        assert_eq!(fx.evaluate(&mut state, id), StateStatus::Finished);
    }

    #[test]
    fn success_resets_backoff() {
        let mut ledger = PathLedger::new(Tick(0));
        ledger.record(Tick(50), true);
        ledger.record(Tick(140), false);
        assert!(!ledger.gave_up(Tick(150), 100));
        assert!(ledger.gave_up(Tick(151), 100));

        ledger.record(Tick(151), true);
        assert!(!ledger.gave_up(Tick(400), 100));
    }

    #[test]
    fn dead_walker_queues_nothing() {
        let mut fx = Fixture::new();
        let id = fx.spawn_at(Position::new(10, 10));
        fx.unit_mut(id).stats.health = -5;
        let mut state = move_to(Position::new(13, 10), fx.world.tick());

        assert_eq!(fx.evaluate(&mut state, id), StateStatus::Finished);
        assert!(fx.actions(id).is_empty());
    }
}
