//! Deterministic unit behavior logic shared by servers and clients.
//!
//! `unit-core` defines the world model (units, ground loot, the clock), the
//! per-unit behavior states that run once per tick, and the intents those
//! states queue. Pathfinding, faction rules, spell data and randomness are
//! injected through the oracle traits in [`env`], so the same code runs on
//! the authoritative server and on predicting clients.
pub mod action;
pub mod behavior;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod notify;
pub mod state;

pub use action::{Action, ActionQueue, AttackAction, AttackStyle, MoveAction, RotateAction};
pub use behavior::{
    AttackState, CastState, EvalContext, IdleState, MoveState, OrderError, PathLedger,
    PickupState, StateKind, StateStatus, UnitOrder, UnitState, try_walk_to,
};
pub use combat::{DamageFlags, roll_damage};
pub use config::{DamageRoll, GameConfig};
pub use engine::{Scheduler, StateTransition, TransitionCause};
pub use env::{
    CombatRules, Env, GameEnv, NavigationOracle, OracleError, PcgRng, RngOracle, Spell, SpellId,
    SpellOracle, WalkGoal, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use notify::{Notification, NotificationSink, PickupKind, Role};
pub use state::{
    Angle, Area, EntityId, Footprint, ItemHandle, ItemStack, ItemsPack, MapDimensions, Position,
    Sack, Tick, Unit, UnitStats, World, WorldError,
};
