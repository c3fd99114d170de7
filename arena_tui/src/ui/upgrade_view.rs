//! Upgrade overlay

use super::centered_rect;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(60, 60, area);

    let items: Vec<ListItem> = app
        .offers()
        .iter()
        .enumerate()
        .map(|(i, offer)| {
            let selected = i == app.selected_offer;
            let marker = if selected { "▶ " } else { "  " };
            let title_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{} ", offer.glyph)),
                    Span::styled(offer.title.clone(), title_style),
                ]),
                Line::from(Span::styled(
                    format!("     {}", offer.description),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Choose an Upgrade "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(list, popup);
}
