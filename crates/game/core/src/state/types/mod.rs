pub mod common;
pub mod item;
pub mod unit;

pub use common::{Angle, Area, EntityId, Footprint, Position, Tick};
pub use item::{ItemHandle, ItemStack, ItemsPack, Sack};
pub use unit::{Unit, UnitStats};
