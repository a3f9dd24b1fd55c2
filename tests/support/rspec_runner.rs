//! Single entry point for the rspec suites.

use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};
use std::fmt::Debug;
use std::sync::Arc;

/// Runs `suite` one example at a time, in declaration order.
///
/// Examples share their environment's app, so ordering matters. The first
/// failing example exits the test process with a non-zero status.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + Debug,
{
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid rspec configuration: {e}"));
    Runner::new(config, vec![Arc::new(Logger::new(std::io::stdout()))]).run(suite);
}
