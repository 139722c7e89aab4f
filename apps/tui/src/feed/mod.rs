// Feed module for quake_report
// Downloads the USGS GeoJSON document and maps it to earthquakes

pub mod fetch;
pub mod parse;

pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use parse::{parse_feed, parse_feed_bytes};
