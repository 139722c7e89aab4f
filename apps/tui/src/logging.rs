use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Interactive mode without a log file; the terminal belongs to the UI
    Off,
}

impl LogTarget {
    pub fn for_mode(interactive: bool, log_file: Option<PathBuf>) -> Self {
        match (interactive, log_file) {
            (_, Some(path)) => Self::File(path),
            (true, None) => Self::Off,
            (false, None) => Self::Stderr,
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `debug`.
pub fn init(debug: bool, target: &LogTarget) -> std::io::Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).compact();

    // A second init (tests, repeated runs) keeps the first subscriber.
    let _ = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    Ok(())
}
