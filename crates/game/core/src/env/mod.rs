//! Traits describing the collaborators unit states consult.
//!
//! Oracles expose navigation, attack eligibility, spell templates and
//! randomness. The [`Env`] aggregate bundles the ones needed during per-tick
//! evaluation so states never couple to concrete implementations.
mod error;
mod navigation;
mod rng;
mod rules;
mod spells;

pub use error::OracleError;
pub use navigation::{NavigationOracle, WalkGoal};
pub use rng::{PcgRng, ROLL_MELEE_DAMAGE, RngOracle, compute_seed};
pub use rules::CombatRules;
pub use spells::{Spell, SpellId, SpellOracle};

use crate::config::GameConfig;

/// Aggregates read-only collaborators required during state evaluation.
pub struct Env<'a, N, C, R>
where
    N: NavigationOracle + ?Sized,
    C: CombatRules + ?Sized,
    R: RngOracle + ?Sized,
{
    navigation: &'a N,
    rules: &'a C,
    rng: &'a R,
    config: &'a GameConfig,
}

pub type GameEnv<'a> =
    Env<'a, dyn NavigationOracle + 'a, dyn CombatRules + 'a, dyn RngOracle + 'a>;

impl<N, C, R> Clone for Env<'_, N, C, R>
where
    N: NavigationOracle + ?Sized,
    C: CombatRules + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, C, R> Copy for Env<'_, N, C, R>
where
    N: NavigationOracle + ?Sized,
    C: CombatRules + ?Sized,
    R: RngOracle + ?Sized,
{
}

impl<'a, N, C, R> Env<'a, N, C, R>
where
    N: NavigationOracle + ?Sized,
    C: CombatRules + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(navigation: &'a N, rules: &'a C, rng: &'a R, config: &'a GameConfig) -> Self {
        Self {
            navigation,
            rules,
            rng,
            config,
        }
    }

    pub fn navigation(&self) -> &'a N {
        self.navigation
    }

    pub fn rules(&self) -> &'a C {
        self.rules
    }

    pub fn rng(&self) -> &'a R {
        self.rng
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}

impl<'a, N, C, R> Env<'a, N, C, R>
where
    N: NavigationOracle + 'a,
    C: CombatRules + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based [`GameEnv`].
    pub fn into_game_env(self) -> GameEnv<'a> {
        let navigation: &'a dyn NavigationOracle = self.navigation;
        let rules: &'a dyn CombatRules = self.rules;
        let rng: &'a dyn RngOracle = self.rng;
        Env::new(navigation, rules, rng, self.config)
    }
}
