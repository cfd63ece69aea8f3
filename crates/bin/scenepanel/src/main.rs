//! # scenepanel — scene list panel
//!
//! Composition root that wires the HTTP zone source into the scene list
//! controller and prints the resulting list.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Read the initial scenes, zones and buttons
//! - Construct the zone source adapter and inject it into the controller
//! - Drive the controller lifecycle: activate, settle, render, dispose
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no view-state logic belongs here.

mod config;
mod data;
mod render;

use scenepanel_adapter_http_reqwest::HttpZoneSource;
use scenepanel_app::list_controller::ListStateController;
use scenepanel_domain::list_state::ListProps;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::render::TextRenderer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let props = match &config.panel.data_file {
        Some(path) => data::load(path)?,
        None => ListProps::default(),
    };
    tracing::info!(
        scenes = props.scenes.len(),
        zones = props.zones.len(),
        system_id = %config.api.system_id,
        "scene list starting"
    );

    let source = HttpZoneSource::new(config.api.clone());
    let mut controller = ListStateController::new(source, props);
    controller.activate();
    controller.settle().await;

    if config.panel.edit_mode {
        controller.enter_edit_mode();
    }

    let blocks = controller.render(&mut TextRenderer);
    if blocks.is_empty() {
        println!("no scenes");
    }
    for block in blocks {
        println!("{block}");
    }

    controller.dispose();
    Ok(())
}
