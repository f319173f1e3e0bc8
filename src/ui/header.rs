//! Name field, or the current player with the new-player control.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::{Focus, PlayerState};
use crate::storage::Storage;

pub fn render<C: Storage, L: Storage>(frame: &mut Frame, area: Rect, app: &App<C, L>) {
    let line = if app.name_input_visible() {
        name_field(app.name_input(), app.focus() == Focus::Name)
    } else {
        let name = match app.player() {
            PlayerState::Identified(name) => name.as_str(),
            PlayerState::NeedsName => "",
        };
        Line::from(vec![
            Span::styled("Playing as ", Style::default().fg(Color::Gray)),
            Span::styled(name.to_string(), Style::default().fg(Color::Green).bold()),
            Span::styled("   [n] new player", Style::default().fg(Color::DarkGray)),
        ])
    };

    let border = if app.focus() == Focus::Name {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn name_field(input: &str, focused: bool) -> Line<'_> {
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled("Your name: ", Style::default().fg(Color::White)),
        Span::styled(input, Style::default().fg(Color::Yellow)),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ])
}
