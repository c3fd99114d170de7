//! Arena view: arsenals, last battle and the battle log

use super::durability_bar;
use crate::app::App;
use arena_core::{describe_beats, Arsenal, Outcome, WeaponId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(40), // Arsenals
            Constraint::Min(30),    // Battle + log
        ])
        .split(area);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Battle field
            Constraint::Min(0),    // Log
        ])
        .split(chunks[1]);

    draw_player_arsenal(f, app, side_chunks[0]);
    draw_computer_arsenal(f, app, side_chunks[1]);
    draw_battle(f, app, main_chunks[0]);
    draw_log(f, app, main_chunks[1]);
}

fn max_durability(app: &App) -> u32 {
    let rules = &app.session.rules.durability;
    rules.starting.max(rules.unlocked)
}

fn draw_player_arsenal(f: &mut Frame, app: &App, area: Rect) {
    let max = max_durability(app);
    let mut lines = Vec::new();

    for (slot, weapon) in app.session.progress.unlocked.iter().enumerate() {
        let durability = app.session.player.durability(*weapon);
        let usable = durability > 0;
        let name_style = if usable {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", slot + 1), Style::default().fg(Color::Yellow)),
            Span::raw(format!("{} ", weapon.glyph())),
            Span::styled(format!("{:10}", weapon.label()), name_style),
            Span::styled(
                durability_bar(durability, max),
                Style::default().fg(if usable { Color::Green } else { Color::DarkGray }),
            ),
            Span::styled(format!(" {}", durability), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", describe_beats(*weapon)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if app.session.is_player_exhausted() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "All weapons broken",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Your Arsenal "));

    f.render_widget(paragraph, area);
}

fn draw_computer_arsenal(f: &mut Frame, app: &App, area: Rect) {
    let max = max_durability(app);
    let lines: Vec<Line> = arsenal_rows(&app.session.computer)
        .into_iter()
        .map(|(weapon, durability)| {
            Line::from(vec![
                Span::raw(format!("{} ", weapon.glyph())),
                Span::styled(format!("{:10}", weapon.label()), Style::default().fg(Color::Gray)),
                Span::styled(durability_bar(durability, max), Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Computer Arsenal "));

    f.render_widget(paragraph, area);
}

fn arsenal_rows(arsenal: &Arsenal) -> Vec<(WeaponId, u32)> {
    arsenal
        .weapons()
        .into_iter()
        .map(|w| (w, arsenal.durability(w)))
        .collect()
}

fn draw_battle(f: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.last_result {
        Some(result) => {
            let (player_color, computer_color, message_color) = match result.outcome {
                Outcome::Player => (Color::Green, Color::Red, Color::Green),
                Outcome::Computer if result.shielded => (Color::Yellow, Color::Yellow, Color::Cyan),
                Outcome::Computer => (Color::Red, Color::Green, Color::Red),
                Outcome::Tie => (Color::Gray, Color::Gray, Color::White),
            };

            vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} {}", result.player_choice.glyph(), result.player_choice.label()),
                        Style::default().fg(player_color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("   vs   ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!(
                            "{} {}",
                            result.computer_choice.glyph(),
                            result.computer_choice.label()
                        ),
                        Style::default().fg(computer_color).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    result.message.clone(),
                    Style::default().fg(message_color),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Choose your weapon!",
            Style::default().fg(Color::Gray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Battle "))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .battle_log
        .iter()
        .skip(app.log_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = if line.starts_with("━━━") {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if line.contains("You win") {
                Style::default().fg(Color::Green)
            } else if line.contains("You lose") {
                Style::default().fg(Color::Red)
            } else if line.contains('★') || line.contains("unlocked") {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(line.as_str()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Battle Log "));

    f.render_widget(list, area);
}
