mod alert;
mod header;
mod questions;
mod scores;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::Focus;
use crate::storage::Storage;

pub fn render<C: Storage, L: Storage>(frame: &mut Frame, app: &App<C, L>, alert: Option<&str>) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let body = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
        .spacing(1)
        .split(rows[2]);

    render_title(frame, rows[0]);
    header::render(frame, rows[1], app);
    questions::render(frame, body[0], app);
    scores::render(frame, body[1], app.scores());
    render_controls(frame, rows[3], app);

    if let Some(message) = alert {
        alert::render(frame, area, message);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Span::styled(
        "TRIVIA NIGHT",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_controls<C: Storage, L: Storage>(frame: &mut Frame, area: Rect, app: &App<C, L>) {
    let text = match app.focus() {
        Focus::Name => "type your name  ·  tab questions  ·  enter submit  ·  esc quit",
        Focus::Questions if app.name_input_visible() => {
            "j/k question  ·  1-4 choose  ·  space cycle  ·  tab name  ·  enter submit  ·  q quit"
        }
        Focus::Questions => {
            "j/k question  ·  1-4 choose  ·  space cycle  ·  enter submit  ·  n new player  ·  q quit"
        }
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::app::Event;
    use crate::models::Question;
    use crate::storage::{MemoryStorage, ScoreLedger};

    fn screen(app: &App<MemoryStorage, MemoryStorage>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app, None)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_long_question_wraps_inside_panel() {
        let mut app = App::new(MemoryStorage::new(), MemoryStorage::new());
        app.handle(Event::Load);
        app.handle(Event::BatchLoaded(Ok(vec![Question::new(
            "In the original Star Wars trilogy, which planet ENDWORD?",
            "Tatooine",
            ["Hoth", "Endor", "Dagobah"],
        )])));

        let screen = screen(&app);
        assert!(screen.contains("In the original"));
        assert!(screen.contains("ENDWORD?"));
    }

    #[test]
    fn test_scores_show_newest_entry() {
        let storage = MemoryStorage::new();
        let mut ledger = ScoreLedger::new(storage.clone());
        for i in 0..30 {
            ledger.append(&format!("p{}", i), 3);
        }
        ledger.append("latest", 9);

        let mut app = App::new(MemoryStorage::new(), storage);
        app.handle(Event::Load);

        assert!(screen(&app).contains("latest"));
    }
}
