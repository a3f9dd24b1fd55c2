//! Constants shared by the scripted behaviours.
use glam::Vec3;

/// Axis a freshly reoriented owner points along before rotation.
pub const REFERENCE_AXIS: Vec3 = Vec3::X;

/// Name of the child entity whose active flag is toggled each frame.
pub const LIGHT_CHILD_NAME: &str = "Light";

/// A uniform draw strictly above this value activates the light.
///
/// The light is therefore active with probability `1.0 - 0.7 = 0.3`.
pub const LIGHT_ACTIVATION_THRESHOLD: f32 = 0.7;

/// Registry identifier of [`crate::RandomReorient`].
pub const RANDOM_REORIENT_TYPE: &str = "RandomReorient";

/// Candidates drawn by a rejection sampler before it gives up and returns
/// its fallback. A healthy generator needs more than a handful with
/// vanishing probability.
pub const MAX_SAMPLE_ATTEMPTS: u32 = 64;

/// Points closer to the origin than this (squared) are redrawn when sampling
/// directions, since normalising them amplifies rounding error.
pub const MIN_DIRECTION_LENGTH_SQUARED: f32 = 1e-6;
