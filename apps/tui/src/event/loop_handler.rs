use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use quake_report::connectivity::Connectivity;
use quake_report::loader::run_load;
use quake_report::present::QuakeRow;
use quake_report::{LoadOutcome, QuakeLoader};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use std::time::Duration;

use crate::app::browser::SystemOpener;
use crate::app::state::{EMPTY_STATE_TEXT, NO_CONNECTION_TEXT};
use crate::app::{handle_input, App};
use crate::ui;

/// Run one load without a UI and print the result to stdout
pub async fn run_headless(
    connectivity: &dyn Connectivity,
    loader: &QuakeLoader,
    json: bool,
) -> Result<()> {
    let outcome = run_load(connectivity, loader).await;
    let report = HeadlessReport::from_outcome(&outcome, QuakeRow::from_earthquake);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum ReportStatus {
    Ok,
    Empty,
    NoConnection,
}

#[derive(Debug, Serialize)]
struct HeadlessReport {
    status: ReportStatus,
    earthquakes: Vec<QuakeRow>,
}

impl HeadlessReport {
    fn from_outcome(
        outcome: &LoadOutcome,
        to_row: impl Fn(&quake_report::Earthquake) -> QuakeRow,
    ) -> Self {
        match outcome {
            LoadOutcome::NoConnection => Self {
                status: ReportStatus::NoConnection,
                earthquakes: Vec::new(),
            },
            LoadOutcome::Loaded(quakes) if quakes.is_empty() => Self {
                status: ReportStatus::Empty,
                earthquakes: Vec::new(),
            },
            LoadOutcome::Loaded(quakes) => Self {
                status: ReportStatus::Ok,
                earthquakes: quakes.iter().map(to_row).collect(),
            },
        }
    }

    fn to_text(&self) -> String {
        match self.status {
            ReportStatus::NoConnection => format!("{NO_CONNECTION_TEXT}\n"),
            ReportStatus::Empty => format!("{EMPTY_STATE_TEXT}\n"),
            ReportStatus::Ok => self
                .earthquakes
                .iter()
                .map(|row| format!("{}\n", row.to_line()))
                .collect(),
        }
    }
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let opener = SystemOpener;

    loop {
        app.poll_load();
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code, &opener);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Non-fatal redraw error
                    let _ = terminal.draw(|f| ui::ui(app, f));
                }
                Ok(_) | Err(_) => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use quake_report::present::{format_date_in, format_time_in};
    use quake_report::Earthquake;

    fn utc_row(quake: &Earthquake) -> QuakeRow {
        QuakeRow::build(
            quake,
            |ms| format_date_in(&Utc, ms),
            |ms| format_time_in(&Utc, ms),
        )
    }

    #[test]
    fn test_report_lists_rows_in_order() {
        let outcome = LoadOutcome::Loaded(vec![
            Earthquake::new(6.2, "5km NW of Smithville", 1000, "http://x"),
            Earthquake::new(7.0, "Open Ocean", 0, ""),
        ]);

        let report = HeadlessReport::from_outcome(&outcome, utc_row);

        assert_eq!(report.status, ReportStatus::Ok);
        assert_eq!(
            report.to_text(),
            "6.2 | 5km NW of | Smithville | Jan 1, 1970 | 12:00 AM | http://x\n\
             7.0 | Near the | Open Ocean | Jan 1, 1970 | 12:00 AM | \n"
        );
    }

    #[test]
    fn test_report_messages_for_empty_and_offline() -> Result<()> {
        let empty = HeadlessReport::from_outcome(&LoadOutcome::Loaded(Vec::new()), utc_row);
        assert_eq!(empty.status, ReportStatus::Empty);
        assert_eq!(empty.to_text(), "No earthquakes found.\n");

        let offline = HeadlessReport::from_outcome(&LoadOutcome::NoConnection, utc_row);
        assert_eq!(offline.status, ReportStatus::NoConnection);
        assert_eq!(offline.to_text(), "No internet connection.\n");
        assert_eq!(
            serde_json::to_value(&offline)?["status"],
            "no_connection"
        );
        Ok(())
    }

    #[test]
    fn test_report_json_shape() -> Result<()> {
        let outcome = LoadOutcome::Loaded(vec![Earthquake::new(6.2, "A of B", 0, "http://x")]);

        let value = serde_json::to_value(HeadlessReport::from_outcome(&outcome, utc_row))?;

        assert_eq!(value["status"], "ok");
        assert_eq!(value["earthquakes"][0]["badge"], "magnitude6");
        assert_eq!(value["earthquakes"][0]["place"], "B");
        Ok(())
    }
}
