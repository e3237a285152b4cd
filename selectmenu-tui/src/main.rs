//! selectmenu - pick one option from a list in the terminal
//!
//! Opens the select menu over a list of options loaded from a TOML/JSON
//! file or from the config, and prints the selected value on exit.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use selectmenu_core::{load_options, MenuConfig, ViewConfig};
use selectmenu_tui::app::cell_scale;
use selectmenu_tui::tracing_setup::{default_log_path, init_tracing, TracingConfig};
use selectmenu_tui::{App, KeyEventBus};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "selectmenu",
    author,
    version,
    about = "Pick an option from a filterable terminal select menu",
    long_about = "Shows a select menu with an optional title bar, filter and detail pane. \
                  Up/Down move the selection, Enter with nothing selected closes the menu, \
                  and the selected value is printed to stdout on exit."
)]
struct Cli {
    /// Options file (.toml with [[options]] entries, or .json)
    #[arg(long, short = 'o')]
    options: Option<PathBuf>,

    /// Config file (default: ~/.selectmenu/config.toml)
    #[arg(long, short = 'c', env = "SELECTMENU_CONFIG")]
    config: Option<PathBuf>,

    /// Header title
    #[arg(long, short = 't')]
    title: Option<String>,

    /// Hide the header row
    #[arg(long)]
    no_title: bool,

    /// Hide the filter input
    #[arg(long)]
    no_filter: bool,

    /// Show a detail pane for the selected option
    #[arg(long)]
    detail: bool,

    /// Width of the options column, in cells
    #[arg(long)]
    width: Option<u16>,

    /// Height of the pane, in rows
    #[arg(long)]
    height: Option<u16>,

    /// Height of the header row, in rows
    #[arg(long)]
    header_height: Option<u16>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Log file (default: ~/.selectmenu/selectmenu.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the configured view
    fn view_config(&self, base: ViewConfig) -> ViewConfig {
        let mut view = cell_scale(base);

        if let Some(title) = &self.title {
            view.title = title.clone();
        }
        if self.no_title {
            view.has_title = false;
        }
        if self.no_filter {
            view.has_filter = false;
        }
        if let Some(width) = self.width {
            view.width = width;
        }
        if let Some(height) = self.height {
            view.height = height;
        }
        if let Some(header_height) = self.header_height {
            view.header_height = header_height;
        }

        view
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(MenuConfig::config_path);
    let config = match &cli.config {
        Some(path) => MenuConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => MenuConfig::load().context("Failed to load config")?,
    };

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(default_log_path);
    init_tracing(&TracingConfig {
        debug: cli.debug,
        level: config.logging.level.clone(),
        log_file,
    })?;
    config.report(&config_path);

    let options = match &cli.options {
        Some(path) => load_options(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => config.options.clone(),
    };
    if options.is_empty() {
        bail!("No options to show\n\nPass --options <FILE> or add [[options]] to the config");
    }

    let view = cli.view_config(config.menu.clone());
    info!("Starting select menu with {} options", options.len());

    let app = App::new(KeyEventBus::global(), view, options, cli.detail);
    let selection = selectmenu_tui::run(app)?;

    if let Some(value) = selection.first() {
        println!("{}", value);
    }

    Ok(())
}
