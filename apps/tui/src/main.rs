mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use quake_report::connectivity::{Connectivity, FixedConnectivity, TcpProbe};
use quake_report::logging::{self, LogTarget};
use quake_report::QuakeLoader;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = args.config();

    let interactive = !args.headless && is_terminal();
    logging::init(
        args.debug,
        &LogTarget::for_mode(interactive, config.log_file.clone()),
    )?;
    config.log_warnings();
    info!(url = %config.feed_url, timeout = ?config.timeout, "starting quake_report");

    let loader = QuakeLoader::from_config(&config)?;
    let connectivity: Arc<dyn Connectivity> = if args.offline {
        Arc::new(FixedConnectivity(false))
    } else {
        Arc::new(TcpProbe::for_url(&config.feed_url, config.timeout))
    };

    if !interactive {
        return event::run_headless(connectivity.as_ref(), &loader, args.json).await;
    }

    let mut app = App::new(loader, connectivity);
    app.start_load();

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app);

    // A load still in flight is discarded, never applied
    app.reset();

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
