use crate::ui::widgets::popup::centered_rect;
use quake_report::present::MagnitudeColor;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>) {
    let popup_area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}

fn shortcut(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(vec![Span::styled(
            "Quake Report",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(""),
        TextLine::from("Recent significant earthquakes from the USGS feed, newest first."),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        shortcut("  F1 / ?", " - Toggle this help popup"),
        shortcut("  ↑/↓ or k/j", " - Move selection"),
        shortcut("  PgUp/PgDn", " - Jump 5 rows"),
        shortcut("  Home/End", " - First / last earthquake"),
        shortcut("  Enter", " - Open the USGS event page in your browser"),
        shortcut("  r", " - Reload the feed"),
        shortcut("  q / Esc", " - Quit"),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Magnitude colors:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
    ];

    let legend: Vec<Span<'static>> = (1..=10)
        .map(|step| {
            let label = if step == 10 {
                " 10+ ".to_string()
            } else {
                format!(" {step} ")
            };
            Span::styled(
                label,
                Style::default()
                    .fg(Color::White)
                    .bg(MagnitudeColor::for_magnitude(f64::from(step)).color()),
            )
        })
        .collect();
    lines.push(TextLine::from(legend));
    lines.push(TextLine::from(""));

    lines.push(TextLine::from(vec![Span::styled(
        "CLI Options:",
        Style::default().add_modifier(Modifier::BOLD),
    )]));

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
