//! Deterministic random source for planning runs.
//!
//! Every random decision a planner makes (free-space samples, the goal-bias
//! coin flip) draws from one `PlannerRng` passed in explicitly.  Given the
//! same seed, map and configuration, a run is bit-for-bit reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable RNG for one planning run.
///
/// Not `Sync`: give each concurrent planning attempt its own instance, e.g.
/// via [`child`](Self::child).
pub struct PlannerRng(SmallRng);

impl PlannerRng {
    pub fn new(seed: u64) -> Self {
        PlannerRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent RNG with a different seed offset.
    pub fn child(&mut self, offset: u64) -> PlannerRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        PlannerRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
