#![cfg_attr(docsrs, feature(doc_cfg))]
//! Scripted behaviours for Bevy scenes.
//!
//! Scripts are plain Rust types implementing [`ScriptBehaviour`], created by
//! name through a [`ScriptRegistry`] and driven once per frame by
//! [`ScriptPlugin`]. The bundled [`RandomReorient`] script points its owner
//! in a random direction every frame and flickers a child called `Light`.
pub mod behaviour;
pub mod components;
pub mod constants;
pub mod demo;
pub mod host;
pub mod logging;
pub mod plugin;
pub mod registry;
pub mod rng;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use behaviour::{RandomReorient, ScriptBehaviour};
pub use components::{Active, Script, ScriptRequest};
pub use demo::{spawn_demo_scene, DemoScene};
pub use host::{ScriptHost, WorldHost};
pub use logging::init as init_logging;
pub use plugin::{
    attach_scripts_system, run_scripts_system, ScriptAttachFailed, ScriptPlugin, ScriptSettings,
};
pub use registry::{ScriptError, ScriptFactory, ScriptRegistry};
pub use rng::{RandomSource, ScriptRng, SequenceSource};
pub use vector_math::{random_direction, random_point_in_sphere, shortest_rotation};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use flicker::prelude::*;
    //! ```

    pub use crate::Active;
    pub use crate::RandomReorient;
    pub use crate::ScriptBehaviour;
    pub use crate::ScriptPlugin;
    pub use crate::ScriptRegistry;
    pub use crate::ScriptRequest;
    pub use crate::ScriptSettings;
}
