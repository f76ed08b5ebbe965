use bevy::prelude::*;
use std::env;
use std::process::ExitCode;
use world_locator::app_setup::{setup_bevy_app, AppMode};
use world_locator::common::types::EEntityKind;
use world_locator::diagnostics::{init_logging, LocatorLog, Verbose};
use world_locator::query_bridge_plugin::{InspectEntityEvent, LocateQuery, LocateRequest};
use world_locator::world_snapshot_plugin::LocatorConfig;

const DEFAULT_CONFIG_PATH: &str = "assets/locator_config.json";

struct CliArgs {
    config_path: String,
    kind: EEntityKind,
    name: String,
    distance: Option<f32>,
    inspect: bool,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        config_path: DEFAULT_CONFIG_PATH.to_string(),
        kind: EEntityKind::DynamicObject,
        name: String::new(),
        distance: None,
        inspect: false,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => cli.config_path = args.next().ok_or("--config needs a path")?,
            "--kind" => {
                let kind = args.next().ok_or("--kind needs a value")?;
                cli.kind = kind.parse().map_err(|_| format!("unknown kind '{}'", kind))?;
            }
            "--name" => cli.name = args.next().ok_or("--name needs a fragment")?,
            "--distance" => {
                let distance = args.next().ok_or("--distance needs a number")?;
                cli.distance = Some(distance.parse().map_err(|_| format!("bad distance '{}'", distance))?);
            }
            "--inspect" => cli.inspect = true,
            other => return Err(format!("unexpected argument '{}'", other)),
        }
    }
    Ok(cli)
}

fn query_for(cli: &CliArgs) -> Option<LocateQuery> {
    let name = cli.name.clone();
    match cli.kind {
        EEntityKind::DynamicObject => Some(LocateQuery::DynamicObjectsByName { name, container_id: None }),
        EEntityKind::Mobile => Some(LocateQuery::MobilesByName { name, distance: cli.distance }),
        EEntityKind::PermanentObject => Some(LocateQuery::PermanentObjectsByName { name, distance: cli.distance }),
        EEntityKind::Panel => Some(LocateQuery::PanelByName { name }),
        EEntityKind::Player => None,
    }
}

fn main() -> ExitCode {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: world_locator [--config PATH] [--kind KIND] [--name FRAGMENT] [--distance D] [--inspect]");
            return ExitCode::FAILURE;
        }
    };

    let config = match LocatorConfig::load(&cli.config_path) {
        Ok(config) => config,
        Err(e) => {
            init_logging(false);
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(config.debug);

    info!("Starting world locator on '{}'...", cli.config_path);

    let Some(query) = query_for(&cli) else {
        error!("Kind {:?} cannot be searched by name", cli.kind);
        return ExitCode::FAILURE;
    };

    let (mut app, channels) = setup_bevy_app(config, AppMode::Embedded);
    if cli.inspect {
        app.insert_resource(LocatorLog::new(Verbose));
    }

    // First frame spawns the snapshot and fills the registries.
    app.update();

    if let Err(e) = channels.locate_request_sender.send(LocateRequest { request_id: 1, query }) {
        error!("Failed to submit query: {}", e);
        return ExitCode::FAILURE;
    }
    app.update();

    let Ok(response) = channels.locate_response_receiver.try_recv() else {
        error!("No response to the query");
        return ExitCode::FAILURE;
    };

    info!("Found {} matches", response.matches.len());
    for (id, entity) in &response.matches {
        info!("  {} -> {:?}", id, entity);
        if cli.inspect {
            app.world_mut().send_event(InspectEntityEvent(*entity));
        }
    }
    if cli.inspect {
        app.update();
    }

    info!("World locator shutting down.");
    ExitCode::SUCCESS
}
