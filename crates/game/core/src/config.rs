/// How the raw damage roll treats the upper bound of a unit's damage range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DamageRoll {
    /// `[damage_min, damage_max)`.
    #[default]
    HalfOpen,
    /// `[damage_min, damage_max]`.
    Inclusive,
}

/// Simulation constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Fixed simulation rate.
    pub ticks_per_second: u32,
    /// Seconds a move order keeps retrying after its last successful step
    /// once pathfinding has started failing.
    pub path_backoff_seconds: u32,
    /// Cast targets closer than this many cells to a map edge are rejected.
    pub map_border_margin: i32,
    pub damage_roll: DamageRoll,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Half-cell slack added to every attack and spell range check.
    pub const ENGAGEMENT_MARGIN: f32 = 0.5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 20;
    pub const DEFAULT_PATH_BACKOFF_SECONDS: u32 = 5;
    pub const DEFAULT_MAP_BORDER_MARGIN: i32 = 8;

    pub fn new() -> Self {
        Self {
            ticks_per_second: Self::DEFAULT_TICKS_PER_SECOND,
            path_backoff_seconds: Self::DEFAULT_PATH_BACKOFF_SECONDS,
            map_border_margin: Self::DEFAULT_MAP_BORDER_MARGIN,
            damage_roll: DamageRoll::default(),
        }
    }

    pub fn with_ticks_per_second(mut self, ticks_per_second: u32) -> Self {
        self.ticks_per_second = ticks_per_second;
        self
    }

    pub fn with_damage_roll(mut self, damage_roll: DamageRoll) -> Self {
        self.damage_roll = damage_roll;
        self
    }

    /// Length of the move backoff window in ticks.
    pub fn path_backoff_ticks(&self) -> u64 {
        u64::from(self.path_backoff_seconds) * u64::from(self.ticks_per_second)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
