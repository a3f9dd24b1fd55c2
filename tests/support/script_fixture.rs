//! Shared fixture infrastructure for script plugin behavioural tests.
//!
//! rspec hands every example a clone of its environment, and requires that
//! environment to be `Send + Sync`. [`ScriptFixtureBase`] keeps one Bevy
//! `App` behind a mutex so all clones tick the same world.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::*;

/// Bevy `App` that may be moved between the rspec runner's threads.
#[derive(Debug)]
pub struct LockedApp(App);

impl Deref for LockedApp {
    type Target = App;

    fn deref(&self) -> &App {
        &self.0
    }
}

impl DerefMut for LockedApp {
    fn deref_mut(&mut self) -> &mut App {
        &mut self.0
    }
}

// SAFETY: `LockedApp` is only reachable through the mutex in
// `ScriptFixtureBase`, and suites run with `parallel(false)`, so the app is
// never touched from two threads at once.
unsafe impl Send for LockedApp {}
unsafe impl Sync for LockedApp {}

#[derive(Resource, Debug, Default)]
struct PluginsFinalized;

/// Cloneable handle to one shared, lazily finalised app.
#[derive(Debug, Clone)]
pub struct ScriptFixtureBase {
    app: Arc<Mutex<LockedApp>>,
}

impl ScriptFixtureBase {
    /// Wraps an already-configured Bevy `App`.
    #[must_use]
    pub fn new(app: App) -> Self {
        Self {
            app: Arc::new(Mutex::new(LockedApp(app))),
        }
    }

    /// Locks the app, recovering it if an earlier example panicked.
    pub fn app_guard(&self) -> MutexGuard<'_, LockedApp> {
        self.app.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one frame, finalising plugins before the first.
    pub fn tick(&self) {
        let mut app = self.app_guard();
        if !app.world().contains_resource::<PluginsFinalized>() {
            app.finish();
            app.cleanup();
            app.insert_resource(PluginsFinalized);
        }

        app.update();
    }
}
