// Export our modules for use in the binary and tests
pub mod config;
pub mod connectivity;
pub mod domain;
pub mod feed;
pub mod loader;
pub mod logging;
pub mod present;

pub use config::Config;
pub use domain::Earthquake;
pub use loader::{LoadOutcome, LoadPoll, PendingLoad, QuakeLoader};
