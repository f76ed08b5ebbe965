pub mod inspect;
pub mod query_log;

pub use inspect::inspect_entity;
pub use query_log::{ChannelLog, LocatorLog, QueryLog, Silent, Verbose};

use tracing_subscriber::EnvFilter;

/// Installs the global console subscriber.
/// Must be called before the Bevy app is initialized, which then runs without `LogPlugin`.
pub fn init_logging(debug: bool) {
    use tracing_subscriber::prelude::*;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    // RUST_LOG wins; otherwise the config's debug flag picks the default level.
    let default_directive = if debug { "info,world_locator=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
