//! Utility helpers for tests.
//!
//! Builders for headless script apps and accessors that read script output
//! back out of a [`World`].

use bevy::prelude::*;
use bevy_transform::components::Transform;
use flicker::{spawn_demo_scene, Active, DemoScene, ScriptPlugin, ScriptSettings};

/// Builds a headless app running [`ScriptPlugin`] with a fixed seed.
///
/// # Examples
/// ```
/// let app = test_utils::scripted_app(7);
/// assert!(app.world().contains_resource::<flicker::ScriptRng>());
/// ```
pub fn scripted_app(seed: u64) -> App {
    let mut app = App::new();
    app.insert_resource(ScriptSettings { seed: Some(seed) })
        .add_plugins(ScriptPlugin);
    app
}

/// Builds a seeded app and spawns the demo scene into it.
pub fn demo_app(seed: u64, name: &str) -> (App, DemoScene) {
    let mut app = scripted_app(seed);
    let scene = spawn_demo_scene(app.world_mut(), name);
    (app, scene)
}

/// Local rotation of `entity`, or identity if it has no [`Transform`].
pub fn local_rotation(world: &World, entity: Entity) -> Quat {
    world
        .get::<Transform>(entity)
        .map_or(Quat::IDENTITY, |transform| transform.rotation)
}

/// Current [`Active`] flag of `entity`, if it has one.
pub fn active_flag(world: &World, entity: Entity) -> Option<bool> {
    world.get::<Active>(entity).map(|active| active.0)
}

/// One frame of demo output in a bit-comparable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRecord {
    /// Raw bits of the owner's rotation quaternion.
    pub rotation_bits: [u32; 4],
    /// Light state after the frame.
    pub light: Option<bool>,
}

/// Ticks `app` `frames` times and records the demo scene after each tick.
pub fn record_frames(app: &mut App, scene: DemoScene, frames: usize) -> Vec<FrameRecord> {
    (0..frames)
        .map(|_| {
            app.update();
            let world = app.world();
            FrameRecord {
                rotation_bits: local_rotation(world, scene.owner)
                    .to_array()
                    .map(f32::to_bits),
                light: active_flag(world, scene.light),
            }
        })
        .collect()
}
