use crate::app::browser::UrlOpener;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode, opener: &dyn UrlOpener) {
    if handle_help_toggle(app, key) {
        return;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('r') => app.start_load(),
        KeyCode::Enter => app.open_selected(opener),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        _ => {}
    }
}

/// Returns true when the key was consumed by the help popup.
fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::F(1) | KeyCode::Char('?')) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::browser::tests::RecordingOpener;
    use quake_report::connectivity::FixedConnectivity;
    use quake_report::feed::HttpFetcher;
    use quake_report::{Earthquake, LoadOutcome, QuakeLoader};
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> Result<App, quake_report::feed::FetchError> {
        let loader = QuakeLoader::new(
            "http://feed",
            Arc::new(HttpFetcher::new(Duration::from_secs(1))?),
        );
        let mut app = App::new(loader, Arc::new(FixedConnectivity(false)));
        app.apply_outcome(LoadOutcome::Loaded(vec![
            Earthquake::new(6.1, "A", 0, "http://a"),
            Earthquake::new(6.2, "B", 0, "http://b"),
        ]));
        Ok(app)
    }

    #[test]
    fn test_arrows_move_selection() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        let opener = RecordingOpener::default();

        handle_input(&mut app, KeyCode::Down, &opener);
        assert_eq!(app.selected_index, 1);
        handle_input(&mut app, KeyCode::Up, &opener);
        assert_eq!(app.selected_index, 0);
        Ok(())
    }

    #[test]
    fn test_enter_opens_selected_row() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        let opener = RecordingOpener::default();

        handle_input(&mut app, KeyCode::End, &opener);
        handle_input(&mut app, KeyCode::Enter, &opener);

        assert_eq!(opener.opened.borrow().as_slice(), ["http://b/"]);
        Ok(())
    }

    #[test]
    fn test_help_popup_swallows_keys_until_closed() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        let opener = RecordingOpener::default();

        handle_input(&mut app, KeyCode::F(1), &opener);
        assert!(app.show_help);

        handle_input(&mut app, KeyCode::Down, &opener);
        assert_eq!(app.selected_index, 0);

        handle_input(&mut app, KeyCode::Esc, &opener);
        assert!(!app.show_help);
        assert!(app.running);

        handle_input(&mut app, KeyCode::Char('q'), &opener);
        assert!(!app.running);
        Ok(())
    }
}
