use dotenv::dotenv;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// USGS query for the ten most recent earthquakes of magnitude 6 or more
pub const DEFAULT_FEED_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&eventtype=earthquake&orderby=time&minmag=6&limit=10";

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Runtime configuration handed to the loader at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: String,
    pub timeout: Duration,
    pub log_file: Option<PathBuf>,
    /// Values rejected while building the config, logged once a subscriber exists
    pub warnings: Vec<ConfigWarning>,
}

/// A setting whose value was unusable and left at its previous value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub setting: &'static str,
    pub value: String,
    pub kept: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ignoring invalid {} {:?}, keeping {}",
            self.setting, self.value, self.kept
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: None,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads the `QUAKE_*` variables.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Unusable values fall back to the defaults instead of failing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("QUAKE_FEED_URL") {
            let url = url.trim();
            if !url.is_empty() {
                config.feed_url = url.to_string();
            }
        }

        if let Some(raw) = lookup("QUAKE_TIMEOUT_SECS") {
            match parse_timeout_secs(&raw) {
                Some(timeout) => config.timeout = timeout,
                None => config.reject("QUAKE_TIMEOUT_SECS", raw),
            }
        }

        config.log_file = lookup("QUAKE_LOG_FILE")
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        config
    }

    pub fn with_feed_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.feed_url = url;
        }
        self
    }

    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        match secs {
            Some(0) => self.reject("--timeout", "0"),
            Some(secs) => self.timeout = Duration::from_secs(secs),
            None => {}
        }
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.log_file = path;
        }
        self
    }

    /// Emits every rejected value at `warn`. Call after logging is set up.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            tracing::warn!(
                setting = warning.setting,
                value = %warning.value,
                "{warning}"
            );
        }
    }

    fn reject(&mut self, setting: &'static str, value: impl Into<String>) {
        self.warnings.push(ConfigWarning {
            setting,
            value: value.into(),
            kept: format!("{}s", self.timeout.as_secs()),
        });
    }
}

fn parse_timeout_secs(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
