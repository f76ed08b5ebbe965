use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::transform::TransformPlugin;
use crate::client_object_plugin::ClientObjectPlugin;
use crate::diagnostics::LocatorLog;
use crate::error::AppError;
use crate::locator::LocatorSettings;
use crate::query_bridge_plugin::{
    LocateRequest, LocateRequestChannel, LocateResponse, LocateResponseChannel, QueryBridgePlugin,
};
use crate::world_snapshot_plugin::{LocatorConfig, WorldSnapshotPlugin};
use crossbeam_channel::{unbounded, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// The app owns logging and installs `LogPlugin`.
    Standalone,
    /// A host (or a test) already installed a tracing subscriber.
    Embedded,
}

/// External channel ends for the host mod code or tests.
pub struct AppExternalChannelEnds {
    pub locate_request_sender: Sender<LocateRequest>,
    pub locate_response_receiver: Receiver<LocateResponse>,
}

pub fn setup_bevy_app(config: LocatorConfig, mode: AppMode) -> (App, AppExternalChannelEnds) {
    let mut app = App::new();

    let (locate_request_sender, locate_request_receiver) = unbounded::<LocateRequest>();
    let (locate_response_sender, locate_response_receiver) = unbounded::<LocateResponse>();

    // MinimalPlugins does not propagate transforms; locator distances read GlobalTransform.
    app.add_plugins((MinimalPlugins, TransformPlugin));
    if mode == AppMode::Standalone {
        app.add_plugins(LogPlugin::default());
    }

    app.insert_resource(LocatorLog::from_debug_flag(config.debug))
       .insert_resource(LocatorSettings { default_search_distance: config.default_search_distance })
       .insert_resource(config)
       .add_plugins(ClientObjectPlugin)
       .add_plugins(WorldSnapshotPlugin)
       .add_plugins(QueryBridgePlugin)

       // insert only the halves needed by ECS/plugin logic:
       .insert_resource(LocateRequestChannel(locate_request_receiver))
       .insert_resource(LocateResponseChannel(locate_response_sender));

    let channels = AppExternalChannelEnds {
        locate_request_sender,
        locate_response_receiver,
    };
    (app, channels)
}

pub fn setup_bevy_app_from_json(
    config_json: &str,
    mode: AppMode,
) -> Result<(App, AppExternalChannelEnds), AppError> {
    let config = LocatorConfig::from_json(config_json)?;
    Ok(setup_bevy_app(config, mode))
}
