use crate::action::{MoveAction, RotateAction};
use crate::env::{GameEnv, WalkGoal};
use crate::state::{EntityId, World};

/// Queues one step of `unit` towards `goal`.
///
/// Asks the navigation oracle for the next cell that brings the unit within
/// `stand_off` cells of the goal (negative values count as zero). When the
/// step is walkable for the unit, ignoring its own footprint, a move intent
/// is queued followed by a coarse rotate intent if the facing changes.
///
/// Returns `false` when no step exists or the step is blocked. Nothing is
/// queued in that case.
pub fn try_walk_to(
    world: &mut World,
    unit: EntityId,
    goal: WalkGoal,
    stand_off: f32,
    env: &GameEnv<'_>,
) -> bool {
    let stand_off = stand_off.max(0.0);
    let Some(walker) = world.unit(unit) else {
        return false;
    };

    let navigation = env.navigation();
    let Some(step) = navigation.next_step(world, walker, goal, stand_off) else {
        return false;
    };
    if !navigation.is_walkable_for(world, walker, step, true) {
        return false;
    }
    let facing = walker.face_cell(step);

    let Some(walker) = world.unit_mut(unit) else {
        return false;
    };
    walker.actions.push(MoveAction::new(unit, step));
    if walker.angle != facing {
        walker.actions.push(RotateAction::new(unit, facing));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::behavior::test_support::{Fixture, NoPath, StepIntoWall};
    use crate::state::{Angle, Position};

    #[test]
    fn queues_move_then_rotate() {
        let mut fx = Fixture::new();
        let id = fx.spawn_at(Position::new(10, 10));
        let goal = WalkGoal::Cell(Position::new(10, 14));

        assert!(fx.walk(id, goal, 0.0));
        let actions = fx.actions(id);
        assert_eq!(actions.len(), 2);
        assert_eq!(
            actions[0],
            Action::Move(MoveAction::new(id, Position::new(10, 11)))
        );
        assert_eq!(actions[1], Action::Rotate(RotateAction::new(id, Angle(64))));
    }

    #[test]
    fn no_rotate_when_already_facing() {
        let mut fx = Fixture::new();
        let id = fx.spawn_at(Position::new(10, 10));

        assert!(fx.walk(id, WalkGoal::Cell(Position::new(14, 10)), 0.0));
        assert_eq!(fx.actions(id).len(), 1);
    }

    #[test]
    fn no_path_queues_nothing() {
        let mut fx = Fixture::with_navigation(NoPath);
        let id = fx.spawn_at(Position::new(10, 10));

        assert!(!fx.walk(id, WalkGoal::Cell(Position::new(14, 10)), 0.0));
        assert!(fx.actions(id).is_empty());
    }

    #[test]
    fn blocked_step_queues_nothing() {
        let mut fx = Fixture::with_navigation(StepIntoWall);
        let id = fx.spawn_at(Position::new(10, 10));

        assert!(!fx.walk(id, WalkGoal::Cell(Position::new(14, 10)), 0.0));
        assert!(fx.actions(id).is_empty());
    }

    #[test]
    fn negative_stand_off_behaves_like_zero() {
        let mut fx = Fixture::new();
        let id = fx.spawn_at(Position::new(10, 10));

        assert!(fx.walk(id, WalkGoal::Cell(Position::new(11, 10)), -3.0));
        assert_eq!(
            fx.actions(id)[0],
            Action::Move(MoveAction::new(id, Position::new(11, 10)))
        );
    }
}
