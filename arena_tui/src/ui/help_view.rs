//! Help view

use crate::app::App;
use arena_core::{describe_beats, Effect, WeaponId};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let interval = app.session.rules.upgrades.interval;

    let mut lines = vec![
        heading("═══ Controls ═══"),
        key_line("r / p / s / f / a", "Play rock, paper, scissors, fire, air"),
        key_line("1-5", "Play the weapon in that arsenal slot"),
        key_line("↑/k  ↓/j", "Scroll log / select upgrade"),
        key_line("Enter", "Claim the selected upgrade"),
        key_line("Esc", "Skip the upgrade"),
        key_line("n", "New game"),
        key_line("?", "Toggle help"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        heading("═══ Weapons ═══"),
    ];

    for weapon in WeaponId::all() {
        lines.push(key_line(
            &format!("{} {}", weapon.glyph(), weapon.label()),
            &describe_beats(*weapon),
        ));
    }

    lines.push(Line::from(""));
    lines.push(heading("═══ Rules ═══"));
    lines.push(Line::from("  Every weapon breaks after a few uses, for you and the computer."));
    lines.push(Line::from(format!(
        "  Every {} rounds you may unlock a weapon or take a one-round effect.",
        interval
    )));
    lines.push(Line::from(""));
    lines.push(heading("═══ Effects ═══"));
    for effect in Effect::all() {
        lines.push(key_line(
            &format!("{} {}", effect.glyph(), effect.label()),
            effect.description(),
        ));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
