//! Combat resolution helpers.
//!
//! This module only covers what unit states need to emit an attack intent:
//! the damage type carried by an attack and the raw damage roll. Mitigation
//! and armor belong to whatever consumes the intent.
//!
//! - `roll_damage`: uniform raw damage from a unit's damage range

pub mod damage;

pub use damage::{DamageFlags, roll_damage};
