mod app;
mod cli;
mod practice;
mod settings;

use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::DesktopApp;
use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let persisted = settings::load_settings();
    let overrides = cli.overrides();
    info!(?persisted, ?overrides, "starting practice view");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Staffline")
            .with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Staffline",
        options,
        Box::new(move |_cc| Box::new(DesktopApp::new(persisted, overrides))),
    )
    .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;
    Ok(())
}
