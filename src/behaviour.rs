//! Script behaviours and the contract they implement.
//!
//! A behaviour is constructed once per entity by the
//! [`crate::ScriptRegistry`] and then updated every frame with a
//! [`ScriptHost`] scoped to its owner and the shared random source.

use log::info;

use crate::host::ScriptHost;
use crate::rng::RandomSource;
use crate::vector_math::shortest_rotation;
use crate::{LIGHT_ACTIVATION_THRESHOLD, LIGHT_CHILD_NAME, RANDOM_REORIENT_TYPE, REFERENCE_AXIS};

/// Per-frame scripted logic attached to an entity.
pub trait ScriptBehaviour: Send + Sync + 'static {
    /// Identifier this behaviour is registered under.
    fn script_type(&self) -> &'static str;

    /// Instance name given at construction.
    fn name(&self) -> &str;

    /// Runs one frame of the script.
    fn update(&mut self, host: &mut dyn ScriptHost, rng: &mut dyn RandomSource);
}

/// Points its owner in a random direction every frame and flickers the
/// owner's `Light` child, which ends up active roughly 30% of the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomReorient {
    name: String,
}

impl RandomReorient {
    /// Creates the behaviour and logs its construction.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        info!("Construct {RANDOM_REORIENT_TYPE}: {name}");
        Self { name }
    }
}

impl ScriptBehaviour for RandomReorient {
    fn script_type(&self) -> &'static str {
        RANDOM_REORIENT_TYPE
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, host: &mut dyn ScriptHost, rng: &mut dyn RandomSource) {
        // The child lookup needs the owner as well, so both steps share the guard.
        let Some(owner) = host.owner() else {
            return;
        };

        let direction = rng.random_direction();
        host.set_local_rotation(owner, shortest_rotation(REFERENCE_AXIS, direction));

        if let Some(light) = host.find_child_by_name(owner, LIGHT_CHILD_NAME) {
            host.set_active(light, rng.unit() > LIGHT_ACTIVATION_THRESHOLD);
        }
    }
}
