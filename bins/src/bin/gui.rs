// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The Gapminder desktop app
//!

use clap::Parser;
use eframe::egui::ViewportBuilder;
use gapminder_core::{
    ContinentError, ContinentFilter, Controller, Dataset, DatasetError, PlaybackConfig,
};
use gapminder_gui::{DEFAULT_WINDOW_SIZE, GapminderApp};
use gapminder_renderer::ChartConfig;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use thiserror::Error;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Everything that can stop the app from running
#[derive(Error, Debug)]
enum GuiError {
    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("continent: {0}")]
    Continent(#[from] ContinentError),

    #[error("GUI: {0}")]
    Gui(#[from] eframe::Error),
}

/// Gapminder CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Gapminder bubble chart",
    after_help = "Space plays/stops, R resets, and the arrow keys step through the years"
)]
pub struct Cli {
    /// Path to the JSON dataset (one entry per year from 1800 to 2014)
    #[arg(long)]
    data: PathBuf,

    /// Only show one continent (e.g. "asia"), or "all"
    #[arg(long, default_value = "all")]
    continent: String,

    /// Milliseconds between years while playing
    #[arg(long, default_value_t = 150)]
    interval_ms: u64,

    /// Milliseconds bubbles take to move to their new position
    #[arg(long, default_value_t = 100)]
    transition_ms: u64,

    /// Start playing straight away
    #[arg(long)]
    play: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Entry point for the native GUI desktop application
fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<(), GuiError> {
    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("gapminder")
        .add_filter_allow_str("gui")
        .build();

    CombinedLogger::init(vec![TermLogger::new(
        args.log_level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    // Load the data and set up the controller
    let dataset = Dataset::from_path(&args.data)?;
    let filter: ContinentFilter = args.continent.parse()?;
    let playback_config = PlaybackConfig {
        interval: Duration::from_millis(args.interval_ms),
    };
    let chart_config = ChartConfig {
        transition: Duration::from_millis(args.transition_ms),
        ..ChartConfig::default()
    };

    let mut controller = Controller::new(dataset, playback_config);
    controller.filter_by(filter);
    if args.play {
        controller.play();
    }

    // Setup the main window's default options
    let main_viewport_options = ViewportBuilder::default()
        .with_inner_size([DEFAULT_WINDOW_SIZE.width, DEFAULT_WINDOW_SIZE.height]);

    // Setup the eframe options for a native application
    let options = eframe::NativeOptions {
        viewport: main_viewport_options,
        ..Default::default()
    };

    info!("Launching application");

    // Run the application
    eframe::run_native(
        "Gapminder",
        options,
        Box::new(move |cc| {
            Ok(Box::new(GapminderApp::new(
                &cc.egui_ctx,
                controller,
                chart_config,
            )))
        }),
    )?;
    Ok(())
}
