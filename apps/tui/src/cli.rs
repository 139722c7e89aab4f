use clap::{CommandFactory, Parser};
use quake_report::Config;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quake_report",
    version,
    about = "Recent earthquakes from the USGS feed"
)]
pub struct CliArgs {
    /// Print the earthquake list and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Treat the network as unavailable
    #[arg(long)]
    pub offline: bool,

    /// Override the feed URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Network timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Append logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Environment config with command-line overrides applied on top
    pub fn config(&self) -> Config {
        Config::from_env()
            .with_feed_url(self.url.clone())
            .with_timeout_secs(self.timeout)
            .with_log_file(self.log_file.clone())
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
