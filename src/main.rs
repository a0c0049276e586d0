mod app;
mod cli;
mod color;
mod data;
mod series;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;

use app::ErrPlotApp;
use cli::Cli;
use data::loader::load_table;
use series::PlotData;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let table = load_table(&cli.file)
        .with_context(|| format!("loading table from {}", cli.file.display()))?;
    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.n_rows(),
        table.n_cols(),
        cli.file.display()
    );
    if table.is_empty() {
        log::warn!("{} has no data rows", cli.file.display());
    }

    let plot = PlotData::from_table(&table).context("building plot series")?;
    let state = AppState::new(&cli.file, plot);
    let title = format!("errplot - {}", state.source_name);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    log::info!("Opening plot window");
    // Blocks until the window is closed.
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ErrPlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("display failed: {e}"))
}
