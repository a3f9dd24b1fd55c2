//! Random number sources consumed by scripts.
//!
//! Scripts draw through the [`RandomSource`] trait rather than a concrete
//! generator. In the app the draws come from the [`ScriptRng`] resource; a
//! seeded resource makes every frame bit-exact reproducible.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::vector_math;

/// Uniform random draws available to scripts.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Returns a point distributed uniformly inside the unit ball.
    fn random_point_in_sphere(&mut self) -> Vec3 {
        vector_math::random_point_in_sphere(self)
    }

    /// Returns a uniformly distributed unit vector.
    fn random_direction(&mut self) -> Vec3 {
        vector_math::random_direction(self)
    }
}

impl RandomSource for StdRng {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Generator shared by every script in the app.
///
/// [`crate::ScriptPlugin`] inserts it based on
/// [`crate::ScriptSettings::seed`].
#[derive(Resource, Debug, Clone)]
pub struct ScriptRng(StdRng);

impl ScriptRng {
    /// Creates a generator whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Builds the generator described by an optional seed.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl RandomSource for ScriptRng {
    fn unit(&mut self) -> f32 {
        self.0.unit()
    }
}

/// Replays a fixed list of draws, starting over when it runs out.
///
/// Useful for reproducing a recorded frame or forcing a particular branch.
/// Values are clamped into `[0, 1)` and non-finite values replaced by
/// `0.0`; an empty list always yields `0.0`. Replaying a list that never
/// produces a usable sample makes the samplers return their fallbacks.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    draws: Vec<f32>,
    next: usize,
}

impl SequenceSource {
    /// Creates a source replaying `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = f32>) -> Self {
        let draws = draws
            .into_iter()
            .map(|draw| {
                if draw.is_finite() {
                    draw.clamp(0.0, 1.0 - f32::EPSILON)
                } else {
                    0.0
                }
            })
            .collect();
        Self { draws, next: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn unit(&mut self) -> f32 {
        let Some(draw) = self.draws.get(self.next).copied() else {
            return 0.0;
        };
        self.next = (self.next + 1) % self.draws.len();
        draw
    }
}
