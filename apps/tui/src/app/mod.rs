// App module for quake_report
// Holds the list state and reacts to keys and finished loads

pub mod browser;
pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::App;
