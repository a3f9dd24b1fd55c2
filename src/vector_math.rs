//! Random vector sampling and rotation helpers.
//!
//! Sampling functions are generic over [`RandomSource`] so callers can feed
//! them a seeded generator for reproducible results.
use glam::{Quat, Vec3};

use crate::rng::RandomSource;
use crate::{MAX_SAMPLE_ATTEMPTS, MIN_DIRECTION_LENGTH_SQUARED, REFERENCE_AXIS};

/// Returns a point distributed uniformly inside the unit ball.
///
/// Candidates are drawn from the enclosing cube `[-1, 1)^3` and rejected
/// until one falls inside the ball. On average fewer than two draws are
/// needed. A source that keeps missing the ball for [`MAX_SAMPLE_ATTEMPTS`]
/// candidates gets the origin.
pub fn random_point_in_sphere<R: RandomSource + ?Sized>(rng: &mut R) -> Vec3 {
    (0..MAX_SAMPLE_ATTEMPTS)
        .map(|_| {
            Vec3::new(
                rng.unit().mul_add(2.0, -1.0),
                rng.unit().mul_add(2.0, -1.0),
                rng.unit().mul_add(2.0, -1.0),
            )
        })
        .find(|candidate| candidate.length_squared() <= 1.0)
        .unwrap_or(Vec3::ZERO)
}

/// Returns a uniformly distributed unit vector.
///
/// The direction is a normalised point from [`random_point_in_sphere`].
/// Points too close to the origin are redrawn, up to
/// [`MAX_SAMPLE_ATTEMPTS`] times; after that [`REFERENCE_AXIS`] is returned.
///
/// # Examples
/// ```
/// use flicker::vector_math::random_direction;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let dir = random_direction(&mut rng);
/// assert!((dir.length() - 1.0).abs() < 1e-5);
/// ```
pub fn random_direction<R: RandomSource + ?Sized>(rng: &mut R) -> Vec3 {
    (0..MAX_SAMPLE_ATTEMPTS)
        .map(|_| random_point_in_sphere(rng))
        .find(|point| point.length_squared() > MIN_DIRECTION_LENGTH_SQUARED)
        .map_or(REFERENCE_AXIS, Vec3::normalize)
}

/// Returns the shortest-arc rotation that maps `from` onto `to`.
///
/// Both inputs are normalised first. When either is zero or not finite the
/// identity rotation is returned. Opposite vectors yield a half turn about an
/// arbitrary perpendicular axis.
///
/// # Examples
/// ```
/// use flicker::vector_math::shortest_rotation;
/// use glam::Vec3;
///
/// let rot = shortest_rotation(Vec3::X, Vec3::new(0.0, 2.0, 0.0));
/// let mapped = rot * Vec3::X;
/// assert!((mapped - Vec3::Y).length() < 1e-6);
/// ```
#[must_use]
pub fn shortest_rotation(from: Vec3, to: Vec3) -> Quat {
    match (from.try_normalize(), to.try_normalize()) {
        (Some(start), Some(end)) => Quat::from_rotation_arc(start, end),
        _ => Quat::IDENTITY,
    }
}
