//! ECS component types used by the scripting layer.
//! Includes the active flag toggled by scripts and the components that
//! request and own script instances.
use bevy::prelude::*;

use crate::behaviour::ScriptBehaviour;

/// Whether an entity and its subtree take part in updates and rendering.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Deref, DerefMut)]
pub struct Active(pub bool);

impl Default for Active {
    fn default() -> Self {
        Self(true)
    }
}

/// Asks [`crate::ScriptPlugin`] to attach a script of a registered type.
///
/// The request is consumed on the next update and replaced by a [`Script`].
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ScriptRequest {
    /// Identifier the script type was registered under.
    pub script_type: String,
    /// Instance name handed to the script constructor.
    pub name: String,
}

impl ScriptRequest {
    /// Creates a request for `script_type` with the given instance name.
    pub fn new(script_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            script_type: script_type.into(),
            name: name.into(),
        }
    }
}

/// A constructed script owned by the entity it drives.
#[derive(Component, Deref, DerefMut)]
pub struct Script(pub Box<dyn ScriptBehaviour>);

impl std::fmt::Debug for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Script")
            .field("script_type", &self.0.script_type())
            .field("name", &self.0.name())
            .finish()
    }
}
