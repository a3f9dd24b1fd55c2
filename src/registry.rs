//! Startup-time table mapping script type identifiers to constructors.
//!
//! Hosts register every script type once, then build instances by
//! identifier when an entity asks for one. There is no runtime reflection:
//! a type that was never registered simply cannot be created.

use bevy::prelude::*;
use hashbrown::HashMap;
use log::info;
use thiserror::Error;

use crate::behaviour::{RandomReorient, ScriptBehaviour};
use crate::RANDOM_REORIENT_TYPE;

/// Constructs a script instance from its name.
pub type ScriptFactory = fn(&str) -> Box<dyn ScriptBehaviour>;

/// Errors returned by [`ScriptRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// No factory was registered under the requested identifier.
    #[error("no script type registered as `{script_type}`")]
    UnknownType {
        /// Identifier that was looked up.
        script_type: String,
    },
    /// A factory already exists for this identifier.
    #[error("script type `{script_type}` is already registered")]
    DuplicateType {
        /// Identifier that was registered twice.
        script_type: String,
    },
}

/// Registered script constructors keyed by script type.
#[derive(Resource, Debug, Clone, Default)]
pub struct ScriptRegistry {
    factories: HashMap<&'static str, ScriptFactory>,
}

fn create_random_reorient(name: &str) -> Box<dyn ScriptBehaviour> {
    Box::new(RandomReorient::new(name))
}

impl ScriptRegistry {
    /// Creates a registry holding every script type shipped with the crate.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut factories: HashMap<&'static str, ScriptFactory> = HashMap::new();
        factories.insert(RANDOM_REORIENT_TYPE, create_random_reorient);
        Self { factories }
    }

    /// Adds a factory for `script_type`.
    ///
    /// # Errors
    /// Returns [`ScriptError::DuplicateType`] if the identifier is taken; the
    /// existing factory is kept.
    pub fn register(
        &mut self,
        script_type: &'static str,
        factory: ScriptFactory,
    ) -> Result<(), ScriptError> {
        if self.factories.contains_key(script_type) {
            return Err(ScriptError::DuplicateType {
                script_type: script_type.to_owned(),
            });
        }
        self.factories.insert(script_type, factory);
        Ok(())
    }

    /// Builds a new `script_type` instance called `name`.
    ///
    /// # Errors
    /// Returns [`ScriptError::UnknownType`] if nothing is registered under
    /// `script_type`.
    pub fn create(
        &self,
        script_type: &str,
        name: &str,
    ) -> Result<Box<dyn ScriptBehaviour>, ScriptError> {
        let factory = self
            .factories
            .get(script_type)
            .ok_or_else(|| ScriptError::UnknownType {
                script_type: script_type.to_owned(),
            })?;
        info!("Create {script_type}: {name}");
        Ok(factory(name))
    }

    /// Whether a factory exists for `script_type`.
    #[must_use]
    pub fn contains(&self, script_type: &str) -> bool {
        self.factories.contains_key(script_type)
    }

    /// Registered identifiers in lexical order.
    #[must_use]
    pub fn script_types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.factories.keys().copied().collect();
        types.sort_unstable();
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScriptHost;
    use crate::rng::RandomSource;
    use rstest::{fixture, rstest};

    struct Idle(String);

    impl ScriptBehaviour for Idle {
        fn script_type(&self) -> &'static str {
            "Idle"
        }

        fn name(&self) -> &str {
            &self.0
        }

        fn update(&mut self, _host: &mut dyn ScriptHost, _rng: &mut dyn RandomSource) {}
    }

    fn create_idle(name: &str) -> Box<dyn ScriptBehaviour> {
        Box::new(Idle(name.to_owned()))
    }

    #[fixture]
    fn registry() -> ScriptRegistry {
        ScriptRegistry::with_builtin()
    }

    #[rstest]
    fn builtin_registry_knows_random_reorient(registry: ScriptRegistry) {
        assert!(registry.contains(RANDOM_REORIENT_TYPE));
        assert_eq!(registry.script_types(), vec![RANDOM_REORIENT_TYPE]);
    }

    #[rstest]
    #[case("Foo")]
    #[case("")]
    #[case("Lamp Post #3")]
    fn create_passes_name_through(registry: ScriptRegistry, #[case] name: &str) {
        let script = registry
            .create(RANDOM_REORIENT_TYPE, name)
            .unwrap_or_else(|e| panic!("create failed: {e}"));
        assert_eq!(script.name(), name);
        assert_eq!(script.script_type(), RANDOM_REORIENT_TYPE);
    }

    #[rstest]
    fn unknown_type_is_rejected(registry: ScriptRegistry) {
        let err = registry.create("Missing", "Foo").err();
        assert_eq!(
            err,
            Some(ScriptError::UnknownType {
                script_type: "Missing".to_owned()
            })
        );
    }

    #[rstest]
    fn duplicate_registration_keeps_first_factory(mut registry: ScriptRegistry) {
        let err = registry.register(RANDOM_REORIENT_TYPE, create_idle);
        assert_eq!(
            err,
            Err(ScriptError::DuplicateType {
                script_type: RANDOM_REORIENT_TYPE.to_owned()
            })
        );
        let script = registry
            .create(RANDOM_REORIENT_TYPE, "Still")
            .unwrap_or_else(|e| panic!("create failed: {e}"));
        assert_eq!(script.script_type(), RANDOM_REORIENT_TYPE);
    }

    #[rstest]
    fn custom_types_can_be_registered(mut registry: ScriptRegistry) {
        assert_eq!(registry.register("Idle", create_idle), Ok(()));
        assert_eq!(registry.script_types(), vec!["Idle", RANDOM_REORIENT_TYPE]);
        let script = registry
            .create("Idle", "Zed")
            .unwrap_or_else(|e| panic!("create failed: {e}"));
        assert_eq!(script.name(), "Zed");
    }

    #[test]
    fn error_messages_name_the_type() {
        let err = ScriptError::UnknownType {
            script_type: "Ghost".to_owned(),
        };
        assert_eq!(err.to_string(), "no script type registered as `Ghost`");
    }
}
