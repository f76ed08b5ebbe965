// Declare all modules that make up the library
pub mod common;
pub mod error;
pub mod app_setup;

pub mod reflect_access;
pub mod locator;
pub mod diagnostics;

pub mod client_object_plugin;
pub mod world_snapshot_plugin;
pub mod query_bridge_plugin;
