// UI module for quake_report
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::quakes::render_quakes_view(app, f);

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}
