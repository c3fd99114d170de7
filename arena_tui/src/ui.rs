//! UI rendering

mod arena_view;
mod help_view;
mod upgrade_view;

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Scoreboard
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_scoreboard(f, app, chunks[0]);

    if app.show_help {
        help_view::draw(f, app, chunks[1]);
    } else {
        arena_view::draw(f, app, chunks[1]);
    }

    draw_keybindings(f, app, chunks[2]);

    if app.session.is_upgrade_pending() && !app.show_help {
        let area = f.area();
        upgrade_view::draw(f, app, area);
    }
}

fn draw_scoreboard(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut spans = vec![
        Span::styled("Round ", Style::default().fg(Color::Gray)),
        Span::styled(
            session.round().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("You: {}", session.player_score()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Computer: {}", session.computer_score()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(effect) = session.effect {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} {}", effect.glyph(), effect),
            Style::default().fg(Color::Magenta),
        ));
    }

    if let Some(revealed) = session.revealed {
        spans.push(Span::styled(
            format!("  Computer plays {} {}", revealed.glyph(), revealed.label()),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Arena "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("n", "New game"), ("?", "Help"), ("q", "Quit")];

    let mode_keys: Vec<(&str, &str)> = if app.session.is_upgrade_pending() {
        vec![("↑/↓", "Select"), ("Enter", "Claim"), ("Esc", "Skip")]
    } else {
        vec![("r/p/s/f/a", "Play weapon"), ("1-5", "Play slot"), ("↑/↓", "Scroll log")]
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in mode_keys.iter().chain(common_keys.iter()).enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Durability bar like `███░░`
pub fn durability_bar(current: u32, max: u32) -> String {
    let filled = current.min(max) as usize;
    let empty = (max as usize).saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Rectangle of the given percentage size centred in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
