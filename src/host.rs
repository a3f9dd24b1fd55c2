//! Scene-graph capabilities a script may use.
//!
//! [`ScriptHost`] is the full surface a behaviour sees of the engine: owner
//! lookup, child lookup by name and a handful of mutations. [`WorldHost`]
//! implements it on top of a Bevy [`World`], scoped to one owner entity.

use bevy::prelude::*;
use bevy_transform::components::Transform;
use log::debug;

use crate::components::Active;

/// Engine services available to a running script.
#[cfg_attr(test, mockall::automock)]
pub trait ScriptHost {
    /// Entity the script is attached to, if it still exists.
    fn owner(&self) -> Option<Entity>;

    /// Finds a direct child of `parent` whose [`Name`] equals `name`.
    ///
    /// The first match in child order wins.
    fn find_child_by_name(&self, parent: Entity, name: &str) -> Option<Entity>;

    /// Overwrites the local rotation of `entity`.
    fn set_local_rotation(&mut self, entity: Entity, rotation: Quat);

    /// Overwrites the local position of `entity`.
    fn set_local_position(&mut self, entity: Entity, position: Vec3);

    /// Sets the [`Active`] flag of `entity`, inserting it if missing.
    fn set_active(&mut self, entity: Entity, active: bool);
}

/// [`ScriptHost`] backed by exclusive access to a Bevy [`World`].
///
/// Mutations aimed at despawned entities, or at entities without a
/// [`Transform`], are dropped and logged at debug level.
pub struct WorldHost<'w> {
    world: &'w mut World,
    owner: Option<Entity>,
}

impl<'w> WorldHost<'w> {
    /// Creates a host for the script attached to `owner`.
    pub const fn new(world: &'w mut World, owner: Option<Entity>) -> Self {
        Self { world, owner }
    }

    fn transform_mut(&mut self, entity: Entity) -> Option<Mut<'_, Transform>> {
        let transform = self.world.get_mut::<Transform>(entity);
        if transform.is_none() {
            debug!("entity {entity} has no Transform; mutation skipped");
        }
        transform
    }
}

impl ScriptHost for WorldHost<'_> {
    fn owner(&self) -> Option<Entity> {
        self.owner
            .filter(|owner| self.world.get_entity(*owner).is_ok())
    }

    fn find_child_by_name(&self, parent: Entity, name: &str) -> Option<Entity> {
        let children: &[Entity] = self.world.get::<Children>(parent)?;
        children.iter().copied().find(|child| {
            self.world
                .get::<Name>(*child)
                .is_some_and(|child_name| child_name.as_str() == name)
        })
    }

    fn set_local_rotation(&mut self, entity: Entity, rotation: Quat) {
        if let Some(mut transform) = self.transform_mut(entity) {
            transform.rotation = rotation;
        }
    }

    fn set_local_position(&mut self, entity: Entity, position: Vec3) {
        if let Some(mut transform) = self.transform_mut(entity) {
            transform.translation = position;
        }
    }

    fn set_active(&mut self, entity: Entity, active: bool) {
        if let Ok(mut entity_mut) = self
            .world
            .get_entity_mut(entity)
            .inspect_err(|e| debug!("cannot set active flag: {e}"))
        {
            entity_mut.insert(Active(active));
        }
    }
}
