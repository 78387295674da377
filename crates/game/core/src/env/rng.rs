//! Injectable RNG for combat rolls.
//!
//! Randomness is a pure function of a seed, and seeds are derived from the
//! world seed, the current tick and the rolling unit. Replaying the same
//! orders therefore reproduces every roll on every peer.

/// Deterministic random source.
///
/// Implementations must return the same value for the same seed.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Value in `[min, max]` inclusive; `min` when the range is empty.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32(seed)) % span) as u32
    }
}

/// PCG-XSH-RR generator: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Roll context for melee damage.
pub const ROLL_MELEE_DAMAGE: u32 = 0;

/// Derive the seed for one roll.
///
/// * `world_seed` - fixed at world creation
/// * `tick` - current simulation tick
/// * `unit` - id of the rolling unit
/// * `context` - distinguishes several rolls by the same unit in one tick
pub fn compute_seed(world_seed: u64, tick: u64, unit: u32, context: u32) -> u64 {
    let mut hash = world_seed;
    hash ^= tick.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(unit).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // SplitMix-style avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
