use std::fmt;

/// A single seismic event taken from the feed.
///
/// Records are only built once every field has been extracted, so the
/// presentation layer never sees a partial earthquake.
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    magnitude: f64,
    location: String,
    time_millis: i64,
    url: String,
}

impl Earthquake {
    pub fn new(
        magnitude: f64,
        location: impl Into<String>,
        time_millis: i64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            location: location.into(),
            time_millis,
            url: url.into(),
        }
    }

    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Event time in milliseconds since the Unix epoch (UTC)
    pub const fn time_millis(&self) -> i64 {
        self.time_millis
    }

    /// Link to the event page on the USGS site
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Earthquake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.magnitude, self.location, self.time_millis, self.url
        )
    }
}
