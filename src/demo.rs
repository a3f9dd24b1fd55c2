//! Minimal scene used by the binary and integration tests.
use bevy::prelude::*;
use bevy_transform::components::Transform;

use crate::components::{Active, ScriptRequest};
use crate::{LIGHT_CHILD_NAME, RANDOM_REORIENT_TYPE};

/// Entities spawned by [`spawn_demo_scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoScene {
    /// Entity carrying the `RandomReorient` script.
    pub owner: Entity,
    /// The owner's `Light` child.
    pub light: Entity,
}

/// Spawns a lamp with a `Light` child and requests a `RandomReorient`
/// script named `name` for it.
pub fn spawn_demo_scene(world: &mut World, name: &str) -> DemoScene {
    let owner = world
        .spawn((
            Name::new("Lamp"),
            Transform::from_translation(Vec3::new(0.0, 2.0, 0.0)),
            ScriptRequest::new(RANDOM_REORIENT_TYPE, name),
        ))
        .id();

    // Light starts off and is switched by the script from the first frame.
    let light = world
        .spawn((
            Name::new(LIGHT_CHILD_NAME),
            Transform::default(),
            Active(false),
            ChildOf(owner),
        ))
        .id();

    DemoScene { owner, light }
}
