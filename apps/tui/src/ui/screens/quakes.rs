use crate::app::App;
use crate::ui::widgets::tables::scroll_offset;
use quake_report::present::QuakeRow;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

const TITLE: &str = "Recent Earthquakes";

pub fn render_quakes_view(app: &App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // List
            Constraint::Length(1), // Status
            Constraint::Length(3), // Shortcuts
        ])
        .split(f.area());

    if app.is_loading() {
        render_loading(app, f, chunks[0]);
    } else if let Some(message) = app.empty_message() {
        render_empty_state(message, f, chunks[0]);
    } else {
        render_table(app, f, chunks[0]);
    }

    render_status(app, f, chunks[1]);
    render_shortcuts(f, chunks[2]);
}

fn render_loading(app: &App, f: &mut Frame<'_>, area: Rect) {
    let throbber = Throbber::default()
        .label("Loading earthquakes...")
        .throbber_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let paragraph = Paragraph::new(vec![TextLine::from(""), throbber.to_line(&app.throbber)])
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn render_empty_state(message: &str, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let paragraph = Paragraph::new(vec![TextLine::from(""), TextLine::from(message.to_string())])
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn render_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Mag"),
        Cell::from("Offset"),
        Cell::from("Place"),
        Cell::from("Date"),
        Cell::from("Time"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.quakes.len();
    // Borders plus header
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_index);

    let rows = app
        .quakes
        .iter()
        .skip(offset)
        .take(max_visible_rows)
        .enumerate()
        .map(|(i, quake)| {
            let is_selected = i + offset == app.selected_index;
            quake_row(&QuakeRow::from_earthquake(quake), is_selected)
        });

    let widths = [
        Constraint::Length(5),
        Constraint::Length(22),
        Constraint::Min(20),
        Constraint::Length(13),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "{TITLE} ({} of {})",
                    app.selected_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn quake_row(row: &QuakeRow, is_selected: bool) -> Row<'static> {
    let style = if is_selected {
        Style::default()
            .bg(Color::Rgb(0, 0, 238))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let badge = Style::default()
        .fg(Color::White)
        .bg(row.badge.color())
        .add_modifier(Modifier::BOLD);

    Row::new(vec![
        Cell::from(format!(" {}", row.magnitude)).style(badge),
        Cell::from(row.offset.trim_end().to_uppercase()).style(Style::default().fg(Color::Gray)),
        Cell::from(row.place.clone()),
        Cell::from(row.date.clone()),
        Cell::from(row.time.clone()),
    ])
    .style(style)
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let color = if app.status_message.starts_with("Error") {
        Color::Red
    } else {
        Color::Gray
    };

    let status = Paragraph::new(Span::styled(
        app.status_message.clone(),
        Style::default().fg(color),
    ));

    f.render_widget(status, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Span::styled("↑/↓", key),
        Span::raw(": Navigate   "),
        Span::styled("PgUp/PgDn", key),
        Span::raw(": Jump 5 rows   "),
        Span::styled("Enter", key),
        Span::raw(": Open in browser   "),
        Span::styled("r", key),
        Span::raw(": Reload   "),
        Span::styled("F1", key),
        Span::raw(": Help   "),
        Span::styled("q", key),
        Span::raw(": Quit"),
    ];

    let help_paragraph = Paragraph::new(TextLine::from(help_text))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help_paragraph, area);
}
