//! Bevy plugin that builds scripts on request and runs them every frame.
//!
//! Entities receive a script by carrying a [`ScriptRequest`]. On the next
//! update [`attach_scripts_system`] looks the requested type up in the
//! [`ScriptRegistry`] and replaces the request with a [`Script`].
//! [`run_scripts_system`] then updates every script once per frame, in
//! sequence, with exclusive world access.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, error};

use crate::components::{Script, ScriptRequest};
use crate::host::WorldHost;
use crate::registry::{ScriptError, ScriptRegistry};
use crate::rng::ScriptRng;

/// Runtime configuration for the scripting layer.
#[derive(Resource, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptSettings {
    /// Seed for [`ScriptRng`]. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

/// Event raised when a [`ScriptRequest`] cannot be fulfilled.
#[derive(Event, Debug, Clone)]
pub struct ScriptAttachFailed {
    /// Entity that carried the request.
    pub entity: Entity,
    /// Why construction failed.
    pub error: ScriptError,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn log_attach_failure(event: On<ScriptAttachFailed>) {
    let ScriptAttachFailed { entity, error } = event.event();
    error!("cannot attach script to {entity}: {error}");
}

/// Bevy plugin wiring script construction and per-frame updates.
///
/// Settings and registry resources inserted before the plugin is added are
/// kept; missing ones are filled with defaults.
#[derive(Default)]
pub struct ScriptPlugin;

impl Plugin for ScriptPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScriptSettings>();
        if !app.world().contains_resource::<ScriptRegistry>() {
            app.insert_resource(ScriptRegistry::with_builtin());
        }
        if !app.world().contains_resource::<ScriptRng>() {
            let seed = app.world().resource::<ScriptSettings>().seed;
            app.insert_resource(ScriptRng::from_seed(seed));
        }

        app.add_observer(log_attach_failure);
        app.add_systems(Update, (attach_scripts_system, run_scripts_system).chain());
    }
}

/// Turns freshly added [`ScriptRequest`]s into [`Script`] components.
///
/// The request is removed whether or not construction succeeds; failures
/// trigger [`ScriptAttachFailed`].
pub fn attach_scripts_system(
    mut commands: Commands,
    registry: Res<ScriptRegistry>,
    requests: Query<(Entity, &ScriptRequest), Added<ScriptRequest>>,
) {
    for (entity, request) in &requests {
        commands.entity(entity).remove::<ScriptRequest>();
        if let Ok(script) = registry
            .create(&request.script_type, &request.name)
            .map_err(|error| commands.trigger(ScriptAttachFailed { entity, error }))
        {
            commands.entity(entity).insert(Script(script));
        }
    }
}

/// Updates every [`Script`] once, each with a host scoped to its entity.
///
/// The script is taken out of its entity for the duration of the update so
/// it can borrow the world mutably, then put back.
pub fn run_scripts_system(world: &mut World) {
    let mut scripted = world.query_filtered::<Entity, With<Script>>();
    let owners: Vec<Entity> = scripted.iter(world).collect();

    world.resource_scope(|world, mut rng: Mut<ScriptRng>| {
        for owner in owners {
            let Some(mut script) = world
                .get_entity_mut(owner)
                .ok()
                .and_then(|mut entity| entity.take::<Script>())
            else {
                continue;
            };

            script.update(&mut WorldHost::new(world, Some(owner)), &mut *rng);
            debug!("updated {} script {:?}", script.script_type(), script.name());

            if let Ok(mut entity) = world
                .get_entity_mut(owner)
                .inspect_err(|_| debug!("script owner {owner} despawned during its update"))
            {
                entity.insert(script);
            }
        }
    });
}
