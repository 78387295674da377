use crate::behavior::{EvalContext, StateStatus, try_walk_to};
use crate::env::WalkGoal;
use crate::notify::{Notification, PickupKind};
use crate::state::{EntityId, Position, World};

/// Walk onto a ground sack and take everything in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupState {
    pub cell: Position,
}

impl PickupState {
    pub fn new(cell: Position) -> Self {
        Self { cell }
    }

    pub fn evaluate(
        &mut self,
        world: &mut World,
        unit: EntityId,
        ctx: &mut EvalContext<'_>,
    ) -> StateStatus {
        let Some(picker) = world.unit(unit) else {
            return StateStatus::Finished;
        };
        if picker.is_dead() || world.sack_at(self.cell).is_none() {
            return StateStatus::Finished;
        }

        if !picker.area().contains(self.cell) {
            try_walk_to(world, unit, WalkGoal::Cell(self.cell), 0.0, &ctx.env);
            return StateStatus::Running;
        }

        let Some(sack) = world.transfer_sack(unit, self.cell) else {
            return StateStatus::Finished;
        };
        for stack in &sack.stacks {
            ctx.notify(Notification::ItemPickup {
                unit,
                kind: PickupKind::Item(stack.handle),
                amount: u64::from(stack.count),
            });
        }
        if sack.money > 0 {
            ctx.notify(Notification::ItemPickup {
                unit,
                kind: PickupKind::Money,
                amount: sack.money,
            });
        }
        ctx.sync(Notification::PackSync { unit });
        StateStatus::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, MoveAction};
    use crate::behavior::UnitState;
    use crate::behavior::test_support::Fixture;
    use crate::notify::Role;
    use crate::state::{Footprint, ItemHandle, ItemStack, ItemsPack, Sack};

    const SWORD: ItemHandle = ItemHandle(3);
    const POTION: ItemHandle = ItemHandle(4);

    fn pickup(cell: Position) -> UnitState {
        UnitState::Pickup(PickupState::new(cell))
    }

    fn loot() -> Sack {
        Sack::new(vec![ItemStack::new(SWORD, 1), ItemStack::new(POTION, 3)], 25)
    }

    #[test]
    fn picks_up_everything_under_footprint() {
        let mut fx = Fixture::new();
        let id = fx.spawn_with(Position::new(10, 10), |unit| {
            unit.with_footprint(Footprint::new(2, 2))
                .with_pack(ItemsPack::new(vec![ItemStack::new(POTION, 1)], 5))
        });
        let cell = Position::new(11, 11);
        fx.world.drop_sack(cell, loot()).unwrap();
        let mut state = pickup(cell);

        assert_eq!(fx.evaluate(&mut state, id), StateStatus::Finished);
        assert!(fx.world.sack_at(cell).is_none());

        let pack = &fx.unit(id).pack;
        // appended, not merged
        assert_eq!(
            pack.stacks(),
            &[
                ItemStack::new(POTION, 1),
                ItemStack::new(SWORD, 1),
                ItemStack::new(POTION, 3)
            ]
        );
        assert_eq!(pack.money, 30);

        assert_eq!(
            fx.notifications,
            vec![
                Notification::ItemPickup {
                    unit: id,
                    kind: PickupKind::Item(SWORD),
                    amount: 1
                },
                Notification::ItemPickup {
                    unit: id,
                    kind: PickupKind::Item(POTION),
                    amount: 3
                },
                Notification::ItemPickup {
                    unit: id,
                    kind: PickupKind::Money,
                    amount: 25
                },
                Notification::PackSync { unit: id },
            ]
        );
    }

    #[test]
    fn observer_skips_pack_sync() {
        let mut fx = Fixture::new().role(Role::Observer);
        let id = fx.spawn_at(Position::new(10, 10));
        fx.world
            .drop_sack(Position::new(10, 10), Sack::new(vec![], 10))
            .unwrap();
        let mut state = pickup(Position::new(10, 10));

        assert_eq!(fx.evaluate(&mut state, id), StateStatus::Finished);
        assert_eq!(fx.unit(id).pack.money, 10);
        assert_eq!(
            fx.notifications,
            vec![Notification::ItemPickup {
                unit: id,
                kind: PickupKind::Money,
                amount: 10
            }]
        );
    }

    #[test]
    fn walks_to_distant_sack() {
        let mut fx = Fixture::new();
        let id = fx.spawn_at(Position::new(10, 10));
        let cell = Position::new(12, 10);
        fx.world.drop_sack(cell, loot()).unwrap();
        let mut state = pickup(cell);

        assert_eq!(fx.evaluate(&mut state, id), StateStatus::Running);
        assert_eq!(
            fx.actions(id),
            vec![Action::Move(MoveAction::new(id, Position::new(11, 10)))]
        );
        fx.play(id);
        fx.evaluate(&mut state, id);
        fx.play(id);

        assert_eq!(fx.evaluate(&mut state, id), StateStatus::Finished);
        assert_eq!(fx.unit(id).pack.len(), 2);
    }

    #[test]
    fn missing_sack_finishes() {
        let mut fx = Fixture::new();
        let id = fx.spawn_at(Position::new(10, 10));
        let mut state = pickup(Position::new(12, 10));

        assert_eq!(fx.evaluate(&mut state, id), StateStatus::Finished);
        assert!(fx.actions(id).is_empty());
        assert!(fx.notifications.is_empty());
    }

    #[test]
    fn dead_unit_leaves_sack_alone() {
        let mut fx = Fixture::new();
        let id = fx.spawn_at(Position::new(10, 10));
        fx.world.drop_sack(Position::new(10, 10), loot()).unwrap();
        fx.unit_mut(id).stats.health = 0;
        let mut state = pickup(Position::new(10, 10));

        assert_eq!(fx.evaluate(&mut state, id), StateStatus::Finished);
        assert!(fx.world.sack_at(Position::new(10, 10)).is_some());
        assert!(fx.unit(id).pack.is_empty());
    }
}
