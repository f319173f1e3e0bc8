use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Padding, Row, Table, TableState},
};

use crate::models::ScoreEntry;

pub fn render(frame: &mut Frame, area: Rect, scores: &[ScoreEntry]) {
    let header = Row::new(vec![Cell::from("Player"), Cell::from("Score")])
        .style(Style::default().fg(Color::Cyan).bold());

    let rows: Vec<Row> = scores
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.username.as_str()),
                Cell::from(entry.score.to_string()),
            ])
            .style(Style::default().fg(Color::White))
        })
        .collect();

    let widget = Table::new(rows, [Constraint::Fill(1), Constraint::Length(5)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Scores ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .row_highlight_style(Style::default().fg(Color::Yellow));

    // Keep the newest entry in view once the ledger outgrows the panel.
    let mut state = TableState::default().with_selected(scores.len().checked_sub(1));
    frame.render_stateful_widget(widget, area, &mut state);
}
